use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use taller_engine::{ConfirmPrompt, CrudScreen, SelectionMode};
use taller_runtime::Workspace;
use taller_types::RecordId;
use tracing::warn;

use crate::presentation::Renderer;
use crate::presentation::presenters::present_delete;

pub fn handle<R: Renderer>(
    workspace: &Workspace,
    screen_path: &str,
    ids: &[u32],
    yes: bool,
    renderer: &R,
) -> Result<()> {
    let mut screen = workspace.mount_path(screen_path)?;
    let mode = screen.selection().mode();

    let mut requested = ids.to_vec();
    requested.sort_unstable();
    requested.dedup();

    if requested.len() > 1 && mode == SelectionMode::Single {
        bail!(
            "selection mode is single; set [selection] mode = \"multiple\" in {} to delete several records at once",
            workspace.config_path().display()
        );
    }

    let mut missing = Vec::new();
    for &id in &requested {
        let record_id = RecordId::new(id);
        let selected = match mode {
            SelectionMode::Single => screen.select(record_id),
            SelectionMode::Multiple => screen.toggle(record_id),
        };
        if !selected {
            warn!(screen = screen_path, id, "record not found");
            missing.push(id);
        }
    }

    if screen.selection().is_empty() {
        bail!("no matching records in {}", screen_path);
    }

    screen.request_delete()?;

    if !yes && !confirm(&screen)? {
        screen.cancel_delete();
        return renderer.render(present_delete(&screen, requested, missing, None));
    }

    let removed = screen.confirm_delete()?;
    renderer.render(present_delete(&screen, requested, missing, Some(removed)))
}

/// Ask on stderr; only an explicit yes confirms
fn confirm(screen: &CrudScreen) -> Result<bool> {
    let ConfirmPrompt::Pending { ids, title, body } = screen.prompt() else {
        return Ok(false);
    };

    if !io::stdin().is_terminal() {
        bail!("refusing to delete without confirmation; pass --yes");
    }

    let mut stderr = io::stderr();
    write!(stderr, "{} {} ({} registro(s)) [s/N] ", title, body, ids.len())?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("failed to read the confirmation")?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}
