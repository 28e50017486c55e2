use crate::model::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("Not logged in. Run `rollcall login` first")]
    NotLoggedIn,

    #[error("Invalid credentials. Use admin / admin123")]
    InvalidCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RollcallError {
    /// The per-field messages, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RollcallError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RollcallError>;
