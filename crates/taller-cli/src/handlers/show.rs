use anyhow::Result;
use taller_runtime::{Workspace, find_record};
use taller_types::RecordId;

use crate::presentation::Renderer;
use crate::presentation::presenters::present_record_detail;

pub fn handle<R: Renderer>(
    workspace: &Workspace,
    screen_path: &str,
    id: u32,
    renderer: &R,
) -> Result<()> {
    let screen = workspace.mount_path(screen_path)?;
    let record = find_record(&screen, RecordId::new(id))?;
    renderer.render(present_record_detail(screen.schema(), record))
}
