use anyhow::Result;
use taller_runtime::{Workspace, routes};

use crate::presentation::Renderer;
use crate::presentation::presenters::{present_screen_list, present_welcome};

pub fn handle<R: Renderer>(renderer: &R) -> Result<()> {
    renderer.render(present_screen_list(&routes()))
}

pub fn handle_welcome<R: Renderer>(workspace: &Workspace, renderer: &R) -> Result<()> {
    renderer.render(present_welcome(workspace, &routes()))
}
