// src/error/types.rs
use crate::domain::{ActivityId, DomainError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Field or quota checks failed; messages are in display order
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Activité non trouvée: {0}")]
    NotFound(ActivityId),

    /// Persisted collection could not be parsed
    #[error("Corrupted persisted data: {0}")]
    CorruptedData(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Validation messages carried by this error, if any
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            AppError::Validation(messages) => Some(messages.as_slice()),
            _ => None,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
