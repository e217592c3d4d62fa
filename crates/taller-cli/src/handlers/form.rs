use std::collections::BTreeSet;

use anyhow::{Result, bail};
use taller_engine::{CrudScreen, Error as EngineError, SubmitOutcome};
use taller_runtime::{Workspace, find_record};
use taller_types::RecordId;
use tracing::debug;

use crate::args::{Assignment, LineInput};
use crate::presentation::Renderer;
use crate::presentation::presenters::{
    present_line_failure, present_mutation, present_rejection, present_validation_failure,
};
use crate::presentation::view_models::MutationKind;

pub fn handle_create<R: Renderer>(
    workspace: &Workspace,
    screen_path: &str,
    assignments: &[Assignment],
    lines: &[LineInput],
    renderer: &R,
) -> Result<()> {
    let mut screen = workspace.mount_path(screen_path)?;
    screen.begin_create();

    fill_form(&mut screen, assignments, lines, renderer)?;
    submit(&mut screen, renderer)
}

/// Open the record in the form, apply the changes and submit.
///
/// Sections named by `--line` are replaced wholesale; the others keep their
/// stored items.
pub fn handle_edit<R: Renderer>(
    workspace: &Workspace,
    screen_path: &str,
    id: u32,
    assignments: &[Assignment],
    lines: &[LineInput],
    renderer: &R,
) -> Result<()> {
    let mut screen = workspace.mount_path(screen_path)?;
    let record_id = RecordId::new(id);
    find_record(&screen, record_id)?;

    screen.select(record_id);
    screen.begin_edit()?;

    let replaced: BTreeSet<&str> = lines.iter().map(|line| line.section.as_str()).collect();
    for section in replaced {
        let seqs: Vec<u32> = screen.form().lines(section).iter().map(|item| item.seq).collect();
        for seq in seqs {
            screen.remove_line(section, seq)?;
        }
        debug!(section, "line section cleared");
    }

    fill_form(&mut screen, assignments, lines, renderer)?;
    submit(&mut screen, renderer)
}

fn fill_form<R: Renderer>(
    screen: &mut CrudScreen,
    assignments: &[Assignment],
    lines: &[LineInput],
    renderer: &R,
) -> Result<()> {
    for assignment in assignments {
        screen.set_field(&assignment.field, assignment.value.clone())?;
    }

    for line in lines {
        let item_id = Some(RecordId::new(line.item));
        match screen.add_line(&line.section, item_id, line.quantity, line.amount) {
            Ok(item) => debug!(section = %line.section, seq = item.seq, "line added"),
            Err(EngineError::Validation(errors)) => {
                renderer.render(present_line_failure(screen.schema(), &line.section, &errors))?;
                bail!("line item for '{}' was not added: {}", line.section, errors);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn submit<R: Renderer>(screen: &mut CrudScreen, renderer: &R) -> Result<()> {
    match screen.submit_form() {
        Ok(SubmitOutcome::Created(record)) => renderer.render(present_mutation(
            screen.schema(),
            MutationKind::Created,
            &record,
            screen.notice(),
        )),
        Ok(SubmitOutcome::Updated(record)) => renderer.render(present_mutation(
            screen.schema(),
            MutationKind::Updated,
            &record,
            screen.notice(),
        )),
        Ok(SubmitOutcome::Missing(id)) => Err(taller_runtime::Error::RecordNotFound {
            screen: screen.schema().kind,
            id,
        }
        .into()),
        Err(EngineError::Validation(errors)) => {
            renderer.render(present_validation_failure(screen.schema(), &errors))?;
            Err(EngineError::Validation(errors).into())
        }
        Err(EngineError::Rejected(message)) => {
            if let Some(notice) = screen.notice() {
                renderer.render(present_rejection(screen.schema(), notice))?;
            }
            bail!(message)
        }
        Err(err) => Err(err.into()),
    }
}
