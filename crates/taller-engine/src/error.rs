use std::fmt;

use crate::validation::ValidationErrors;

/// Result type for taller-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Screen actions that can be unavailable for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Edit => write!(f, "edit"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field-level validation failed; the form stays open
    Validation(ValidationErrors),

    /// Business rule rejected the submission (surfaced as a notice)
    Rejected(String),

    /// The action is disabled for the current selection
    Unavailable { action: Action, selected: usize },

    /// Delete was requested with no ids
    EmptyDeleteSet,

    /// No modal form or prompt is open
    NothingOpen,

    /// Schema-level error (unknown field or section)
    Schema(taller_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(errors) => write!(f, "Validation failed: {}", errors),
            Error::Rejected(msg) => write!(f, "{}", msg),
            Error::Unavailable { action, selected } => write!(
                f,
                "Cannot {} with {} selected record(s)",
                action, selected
            ),
            Error::EmptyDeleteSet => write!(f, "No records selected for deletion"),
            Error::NothingOpen => write!(f, "No form or prompt is open"),
            Error::Schema(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Schema(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl From<taller_types::Error> for Error {
    fn from(err: taller_types::Error) -> Self {
        Error::Schema(err)
    }
}
