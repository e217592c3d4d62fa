use std::fmt;

use taller_types::{EntityKind, RecordId};

/// Result type for taller-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Screen engine error (validation, unavailable action, ...)
    Engine(taller_engine::Error),

    /// Type layer error (unknown screen, field or section)
    Types(taller_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No record with this id on the screen
    RecordNotFound { screen: EntityKind, id: RecordId },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::RecordNotFound { screen, id } => {
                write!(f, "No record with id {} in {}", id, screen)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::RecordNotFound { .. } => None,
        }
    }
}

impl From<taller_engine::Error> for Error {
    fn from(err: taller_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<taller_types::Error> for Error {
    fn from(err: taller_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
