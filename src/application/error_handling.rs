// src/application/error_handling.rs
//
// Error Handling for front-ends
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs infrastructure errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    /// One entry per validation message, in display order
    pub messages: Vec<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Field or quota checks failed; shown verbatim
    Validation,

    /// The activity no longer exists
    NotFound,

    /// Database, pool or file system failure
    Storage,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(messages) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: messages.join("\n"),
                messages,
            },

            AppError::NotFound(_) => Self::not_found(&error.to_string()),

            AppError::Domain(domain_error) => Self::validation(domain_error.to_string()),

            AppError::Database(_) | AppError::Pool(_) | AppError::Io(_) => {
                log::error!("Storage error: {}", error);
                Self::simple(ErrorType::Storage, "Erreur de sauvegarde des données")
            }

            AppError::CorruptedData(_) | AppError::Serialization(_) | AppError::Other(_) => {
                log::error!("Internal error: {}", error);
                Self::simple(ErrorType::Internal, &error.to_string())
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            messages: vec![message.clone()],
            message,
        }
    }

    /// Create not found error
    pub fn not_found(message: &str) -> Self {
        Self::simple(ErrorType::NotFound, message)
    }

    fn simple(error_type: ErrorType, message: &str) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            messages: Vec::new(),
        }
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
