use std::fmt;

/// Result type for taller-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No screen is registered under the given path
    UnknownScreen(String),

    /// A field name that the entity schema does not declare
    UnknownField { entity: String, field: String },

    /// A line section that the entity schema does not declare
    UnknownSection { entity: String, section: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownScreen(path) => write!(f, "Unknown screen: {}", path),
            Error::UnknownField { entity, field } => {
                write!(f, "Unknown field '{}' for {}", field, entity)
            }
            Error::UnknownSection { entity, section } => {
                write!(f, "Unknown line section '{}' for {}", section, entity)
            }
        }
    }
}

impl std::error::Error for Error {}
