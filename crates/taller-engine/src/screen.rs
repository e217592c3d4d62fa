//! The generic CRUD screen: one list, its selection, a modal form and a
//! delete confirmation, parametrised by an `EntitySchema`.

use std::sync::Arc;

use taller_types::{EntitySchema, LineItem, Record, RecordId};
use tracing::{debug, info, warn};

use crate::confirm::ConfirmPrompt;
use crate::form::{FormMode, ModalForm};
use crate::notice::Notice;
use crate::page::Page;
use crate::repository::{InMemoryRepository, Repository};
use crate::selection::{Selection, SelectionMode};
use crate::store::EntityStore;
use crate::validation::Validator;
use crate::{Action, Error, Result};

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub selection_mode: SelectionMode,
    /// Composite entities need one item per line section
    pub require_line_items: bool,
    /// Validate foreign keys against the schema's lookup lists
    pub check_references: bool,
    pub page_size: usize,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            require_line_items: true,
            check_references: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Record),
    Updated(Record),
    /// The edited record was gone; nothing changed
    Missing(RecordId),
}

impl SubmitOutcome {
    pub fn record(&self) -> Option<&Record> {
        match self {
            SubmitOutcome::Created(r) | SubmitOutcome::Updated(r) => Some(r),
            SubmitOutcome::Missing(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrudScreen<R = InMemoryRepository> {
    store: EntityStore<R>,
    selection: Selection,
    form: ModalForm,
    prompt: ConfirmPrompt,
    notice: Option<Notice>,
    options: ScreenOptions,
    page: usize,
}

impl<R: Repository> CrudScreen<R> {
    pub fn new(schema: Arc<EntitySchema>, repo: R, options: ScreenOptions) -> Self {
        debug!(entity = %schema.kind, records = repo.len(), "screen mounted");
        Self {
            store: EntityStore::new(Arc::clone(&schema), repo),
            selection: Selection::new(options.selection_mode),
            form: ModalForm::new(schema),
            prompt: ConfirmPrompt::Hidden,
            notice: None,
            options,
            page: 1,
        }
    }

    pub fn schema(&self) -> &EntitySchema {
        self.store.schema()
    }

    pub fn store(&self) -> &EntityStore<R> {
        &self.store
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn options(&self) -> ScreenOptions {
        self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn form(&self) -> &ModalForm {
        &self.form
    }

    pub fn prompt(&self) -> &ConfirmPrompt {
        &self.prompt
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- list view ---

    pub fn page(&self) -> Page {
        Page::compute(self.store.len(), self.options.page_size, self.page)
    }

    pub fn set_page(&mut self, number: usize) {
        self.page = self.page_at(number).number;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn page_at(&self, number: usize) -> Page {
        Page::compute(self.store.len(), self.options.page_size, number)
    }

    pub fn visible_records(&self) -> &[Record] {
        self.page().slice(self.store.records())
    }

    /// Select a row; unknown ids are ignored
    pub fn select(&mut self, id: RecordId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.selection.toggle(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn can_edit(&self) -> bool {
        self.selection.can_edit()
    }

    pub fn can_delete(&self) -> bool {
        self.selection.can_delete()
    }

    // --- modal form ---

    pub fn begin_create(&mut self) {
        self.form.open_create();
    }

    /// Open the form on the single selected record
    pub fn begin_edit(&mut self) -> Result<()> {
        let record = self
            .selection
            .single()
            .and_then(|id| self.store.get(id))
            .ok_or(Error::Unavailable {
                action: Action::Edit,
                selected: self.selection.len(),
            })?;
        self.form.open_edit(record);
        Ok(())
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.form.set_field(key, value)
    }

    pub fn add_line(
        &mut self,
        section: &str,
        item_id: Option<RecordId>,
        quantity: i64,
        amount: i64,
    ) -> Result<LineItem> {
        self.form.add_line(section, item_id, quantity, amount)
    }

    pub fn remove_line(&mut self, section: &str, seq: u32) -> Result<bool> {
        self.form.remove_line(section, seq)
    }

    /// Validate and store the open form.
    ///
    /// Field errors keep the form open with inline messages; a business-rule
    /// rejection also keeps it open and raises an error notice.
    pub fn submit_form(&mut self) -> Result<SubmitOutcome> {
        let validator = Validator::new().with_reference_check(self.options.check_references);
        let kind = self.schema().kind;

        let submission = match self.form.submit(&validator, self.options.require_line_items) {
            Ok(submission) => submission,
            Err(Error::Rejected(message)) => {
                warn!(entity = %kind, %message, "submission rejected");
                self.notice = Some(Notice::error(message.clone()));
                return Err(Error::Rejected(message));
            }
            Err(err) => {
                debug!(entity = %kind, error = %err, "submission blocked");
                return Err(err);
            }
        };

        let messages = self.schema().messages.clone();
        let outcome = match submission.mode {
            FormMode::Create => {
                let record = self.store.create(submission.fields)?;
                self.notice = Some(Notice::success(messages.created));
                SubmitOutcome::Created(record)
            }
            FormMode::Edit(id) => match self.store.update(id, submission.fields)? {
                Some(record) => {
                    self.notice = Some(Notice::success(messages.updated));
                    SubmitOutcome::Updated(record)
                }
                None => SubmitOutcome::Missing(id),
            },
        };

        self.form.close();
        self.after_mutation();
        Ok(outcome)
    }

    pub fn cancel_form(&mut self) {
        self.form.close();
    }

    // --- delete ---

    /// Open the confirmation prompt for the selected rows; returns the count
    pub fn request_delete(&mut self) -> Result<usize> {
        if !self.selection.can_delete() {
            return Err(Error::Unavailable {
                action: Action::Delete,
                selected: 0,
            });
        }

        let messages = &self.store.schema().messages;
        self.prompt = ConfirmPrompt::pending(
            self.selection.ids(),
            messages.confirm_title,
            messages.confirm_body,
        );
        Ok(self.prompt.count())
    }

    pub fn confirm_delete(&mut self) -> Result<usize> {
        let ids = self.prompt.take().ok_or(Error::NothingOpen)?;
        let removed = self.store.delete(&ids)?;

        info!(entity = %self.schema().kind, requested = ids.len(), removed, "delete confirmed");
        self.notice = Some(Notice::success(self.schema().messages.deleted));
        self.after_mutation();
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.prompt = ConfirmPrompt::Hidden;
    }

    fn after_mutation(&mut self) {
        self.selection.clear();
        self.page = self.page_at(self.page).number;
    }
}
