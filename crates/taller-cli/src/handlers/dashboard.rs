use anyhow::Result;
use taller_runtime::Workspace;

use crate::presentation::Renderer;
use crate::presentation::presenters::present_dashboard;

pub fn handle<R: Renderer>(workspace: &Workspace, renderer: &R) -> Result<()> {
    renderer.render(present_dashboard(&workspace.dashboard()))
}
