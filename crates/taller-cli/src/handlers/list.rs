use anyhow::Result;
use taller_runtime::Workspace;
use tracing::debug;

use crate::presentation::Renderer;
use crate::presentation::presenters::present_record_table;

pub fn handle<R: Renderer>(
    workspace: &Workspace,
    screen_path: &str,
    page: usize,
    renderer: &R,
) -> Result<()> {
    let mut screen = workspace.mount_path(screen_path)?;
    screen.set_page(page);

    let shown = screen.page().number;
    if shown != page {
        debug!(requested = page, shown, "page clamped");
    }

    renderer.render(present_record_table(&screen))
}
