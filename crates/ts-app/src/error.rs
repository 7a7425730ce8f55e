//! Error types for the ts-app service layer.

use std::fmt;

use ts_steam::TableError;

/// Which of the two compared states a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSlot {
    One,
    Two,
}

impl fmt::Display for StateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateSlot::One => f.write_str("State 1"),
            StateSlot::Two => f.write_str("State 2"),
        }
    }
}

/// Application error type that wraps errors from the property backend
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error: {slot} - Please enter valid numeric values.")]
    InvalidNumeric { slot: StateSlot, input: String },

    #[error("Warning: {slot} - You cannot specify the same property twice.")]
    DuplicateProperty { slot: StateSlot },

    #[error("Error in {slot} calculation: {message}")]
    Calculation { slot: StateSlot, message: String },

    #[error("Must specify either pressure or temperature")]
    MissingSaturationInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ts-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        AppError::Backend {
            message: err.to_string(),
        }
    }
}
