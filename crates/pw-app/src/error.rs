//! Error types for the pw-app service layer.

/// Application error type that wraps errors from the extraction crates
/// and provides a unified error interface for callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Extraction error: {0}")]
    Extract(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pw-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pw_extract::ExtractError> for AppError {
    fn from(err: pw_extract::ExtractError) -> Self {
        AppError::Extract(err.to_string())
    }
}
