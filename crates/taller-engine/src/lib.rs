// Engine module - the one reusable CRUD pattern behind every screen.
// Pure state and logic; rendering lives in the CLI crate.

pub mod confirm;
pub mod error;
pub mod form;
pub mod lines;
pub mod notice;
pub mod page;
pub mod repository;
pub mod screen;
pub mod selection;
pub mod store;
pub mod validation;

pub use confirm::ConfirmPrompt;
pub use error::{Action, Error, Result};
pub use form::{FormMode, FormState, ModalForm, Submission};
pub use lines::LineItemEditor;
pub use notice::{Notice, NoticeLevel};
pub use page::Page;
pub use repository::{InMemoryRepository, Repository};
pub use screen::{CrudScreen, ScreenOptions, SubmitOutcome};
pub use selection::{Selection, SelectionMode};
pub use store::EntityStore;
pub use validation::{FieldError, ValidationErrors, Validator};
