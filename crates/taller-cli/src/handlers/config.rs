use anyhow::{Result, bail};
use taller_runtime::{Config, Workspace};

use crate::presentation::Renderer;
use crate::presentation::presenters::{present_config, present_config_init};

pub fn handle_show<R: Renderer>(workspace: &Workspace, renderer: &R) -> Result<()> {
    renderer.render(present_config(workspace))
}

/// Write the default settings to the resolved config path
pub fn handle_init<R: Renderer>(workspace: &Workspace, force: bool, renderer: &R) -> Result<()> {
    let existed = workspace.config_path().exists();
    if existed && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            workspace.config_path().display()
        );
    }

    let fresh = Workspace::with_config(Config::default(), workspace.config_path().to_path_buf());
    let path = fresh.init_config()?;

    renderer.render(present_config_init(
        path.display().to_string(),
        fresh.config(),
        existed,
    )?)
}
