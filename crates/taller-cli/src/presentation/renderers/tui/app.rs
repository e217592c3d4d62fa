use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taller_engine::{CrudScreen, Error as EngineError, SelectionMode};
use taller_runtime::Console;
use taller_types::{EntitySchema, RecordId};

/// A focusable row of the open form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormRow {
    Field(&'static str),
    Section(&'static str),
}

pub(crate) fn form_rows(schema: &EntitySchema) -> Vec<FormRow> {
    schema
        .fields
        .iter()
        .map(|f| FormRow::Field(f.key))
        .chain(schema.sections.iter().map(|s| FormRow::Section(s.key)))
        .collect()
}

/// UI state around a `Console`: cursors, line drafts and the status hint.
/// Records, selection, form and prompt all live in the mounted screen.
pub(crate) struct App {
    pub console: Console,
    pub cursor: usize,
    pub form_cursor: usize,
    /// Pending line input per section, `item qty amount`
    pub drafts: BTreeMap<String, String>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            cursor: 0,
            form_cursor: 0,
            drafts: BTreeMap::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let (prompt_open, form_open) = match self.console.screen() {
            Some(screen) => (screen.prompt().is_pending(), screen.form().is_open()),
            None => (false, false),
        };

        if prompt_open {
            self.handle_prompt_key(key);
        } else if form_open {
            self.handle_form_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    pub fn current_row(&self) -> Option<FormRow> {
        let screen = self.console.screen()?;
        form_rows(screen.schema()).get(self.form_cursor).copied()
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        self.status = None;
        if let Some(screen) = self.console.screen_mut() {
            screen.dismiss_notice();
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.console.next_route();
                self.cursor = 0;
            }
            KeyCode::BackTab => {
                self.console.prev_route();
                self.cursor = 0;
            }
            KeyCode::Char('g') => {
                self.console.navigate_to_index(0);
                self.cursor = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self.visible_len();
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(screen) = self.console.screen_mut() {
                    screen.next_page();
                }
                self.cursor = 0;
            }
            KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => {
                if let Some(screen) = self.console.screen_mut() {
                    screen.prev_page();
                }
                self.cursor = 0;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.select_cursor_row(),
            KeyCode::Esc | KeyCode::Char('c') => {
                if let Some(screen) = self.console.screen_mut() {
                    screen.clear_selection();
                }
            }
            KeyCode::Char('n') => {
                if let Some(screen) = self.console.screen_mut() {
                    screen.begin_create();
                    self.form_cursor = 0;
                    self.drafts.clear();
                }
            }
            KeyCode::Char('e') => {
                if let Some(screen) = self.console.screen_mut() {
                    match screen.begin_edit() {
                        Ok(()) => {
                            self.form_cursor = 0;
                            self.drafts.clear();
                        }
                        Err(_) => {
                            self.status =
                                Some("Seleccione exactamente un registro para editar".to_string());
                        }
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(screen) = self.console.screen_mut()
                    && screen.request_delete().is_err()
                {
                    self.status = Some("Seleccione al menos un registro para eliminar".to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(screen) = self.console.screen_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('s') | KeyCode::Char('S')
            | KeyCode::Enter => {
                if let Err(err) = screen.confirm_delete() {
                    self.status = Some(err.to_string());
                }
                self.clamp_cursor();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => screen.cancel_delete(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let row = self.current_row();
        let rows = self
            .console
            .screen()
            .map(|s| form_rows(s.schema()).len())
            .unwrap_or(0);

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                if let Some(screen) = self.console.screen_mut() {
                    screen.cancel_form();
                }
                self.status = None;
            }
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Down | KeyCode::Tab => {
                if rows > 0 {
                    self.form_cursor = (self.form_cursor + 1) % rows;
                }
            }
            KeyCode::Up | KeyCode::BackTab => {
                if rows > 0 {
                    self.form_cursor = (self.form_cursor + rows - 1) % rows;
                }
            }
            KeyCode::Enter => match row {
                Some(FormRow::Section(section)) => self.add_draft_line(section),
                _ => self.submit(),
            },
            KeyCode::Delete => {
                if let Some(FormRow::Section(section)) = row {
                    self.remove_last_line(section);
                }
            }
            KeyCode::Backspace => match row {
                Some(FormRow::Field(field)) => self.edit_field(field, |value| {
                    value.pop();
                }),
                Some(FormRow::Section(section)) => {
                    if let Some(draft) = self.drafts.get_mut(section) {
                        draft.pop();
                    }
                }
                None => {}
            },
            KeyCode::Char(c) if !ctrl => match row {
                Some(FormRow::Field(field)) => self.edit_field(field, |value| value.push(c)),
                Some(FormRow::Section(section)) => {
                    self.drafts.entry(section.to_string()).or_default().push(c);
                }
                None => {}
            },
            _ => {}
        }
    }

    fn edit_field(&mut self, key: &str, edit: impl FnOnce(&mut String)) {
        let Some(screen) = self.console.screen_mut() else {
            return;
        };
        let mut value = screen.form().value(key).unwrap_or_default().to_string();
        edit(&mut value);
        if let Err(err) = screen.set_field(key, value) {
            self.status = Some(err.to_string());
        }
    }

    fn submit(&mut self) {
        let Some(screen) = self.console.screen_mut() else {
            return;
        };
        self.status = match screen.submit_form() {
            Ok(_) => {
                self.drafts.clear();
                None
            }
            Err(EngineError::Validation(_)) => Some("Revise los campos marcados".to_string()),
            // The screen raised its own error notice
            Err(EngineError::Rejected(_)) => None,
            Err(err) => Some(err.to_string()),
        };
        self.clamp_cursor();
    }

    fn add_draft_line(&mut self, section: &str) {
        let draft = self.drafts.get(section).cloned().unwrap_or_default();
        let Some((item, quantity, amount)) = parse_draft(&draft) else {
            self.status = Some("Formato: ítem cantidad importe".to_string());
            return;
        };
        let Some(screen) = self.console.screen_mut() else {
            return;
        };

        match screen.add_line(section, item, quantity, amount) {
            Ok(_) => {
                self.drafts.remove(section);
                self.status = None;
            }
            Err(EngineError::Validation(errors)) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                self.status = Some(messages.join("; "));
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn remove_last_line(&mut self, section: &str) {
        let Some(screen) = self.console.screen_mut() else {
            return;
        };
        let last = screen.form().lines(section).iter().map(|l| l.seq).max();
        if let Some(seq) = last
            && let Err(err) = screen.remove_line(section, seq)
        {
            self.status = Some(err.to_string());
        }
    }

    fn select_cursor_row(&mut self) {
        let cursor = self.cursor;
        let Some(screen) = self.console.screen_mut() else {
            return;
        };
        let Some(id) = row_id(screen, cursor) else {
            return;
        };
        match screen.selection().mode() {
            SelectionMode::Single => screen.select(id),
            SelectionMode::Multiple => screen.toggle(id),
        };
    }

    fn visible_len(&self) -> usize {
        self.console
            .screen()
            .map(|s| s.visible_records().len())
            .unwrap_or(0)
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible_len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}

fn row_id(screen: &CrudScreen, cursor: usize) -> Option<RecordId> {
    screen.visible_records().get(cursor).map(|r| r.id)
}

/// `item qty amount`, separated by spaces or colons; a blank item is `None`
fn parse_draft(draft: &str) -> Option<(Option<RecordId>, i64, i64)> {
    let parts: Vec<&str> = draft
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [item, quantity, amount] => Some((
            Some(item.parse().ok()?),
            quantity.parse().ok()?,
            amount.parse().ok()?,
        )),
        [quantity, amount] => Some((None, quantity.parse().ok()?, amount.parse().ok()?)),
        _ => None,
    }
}
