use std::io;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use taller_runtime::{Console, Route, Workspace};

use crate::presentation::renderers::tui;

pub fn handle(workspace: Workspace, screen: Option<&str>) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("the console needs an interactive terminal; use `taller list <screen>` instead");
    }

    let mut console = Console::new(workspace);
    if let Some(path) = screen {
        console.navigate(Route::parse(path)?);
    }

    tui::run(console)
}
