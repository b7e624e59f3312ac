//! Translation errors surfaced to the host

use catalog_filter_diagnostics::{ErrorCode, FLT0100, FilterError};
use thiserror::Error;

/// Result type for translation
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors returned by [`crate::FilterTranslator::translate`]
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    /// The call itself was malformed (no filter supplied)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The filter cannot be expressed against the backend
    #[error("Unsupported query: {message}")]
    UnsupportedQuery {
        message: String,
        #[source]
        source: FilterError,
    },
}

impl TranslateError {
    /// Create a missing-filter error
    pub fn missing_filter() -> Self {
        Self::InvalidArgument {
            message: "filter is required".to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => FLT0100,
            Self::UnsupportedQuery { source, .. } => source.code(),
        }
    }

    /// Get the error raised during traversal, if any
    pub fn cause(&self) -> Option<&FilterError> {
        match self {
            Self::InvalidArgument { .. } => None,
            Self::UnsupportedQuery { source, .. } => Some(source),
        }
    }
}

impl From<FilterError> for TranslateError {
    fn from(err: FilterError) -> Self {
        Self::UnsupportedQuery {
            message: err.to_string(),
            source: err,
        }
    }
}
