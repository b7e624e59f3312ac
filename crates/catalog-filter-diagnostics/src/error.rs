//! Filter error types

use crate::{ErrorCode, FLT0001, FLT0002, FLT0008, FLT0200};
use thiserror::Error;

/// Broad category of a [`FilterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The construct cannot be expressed against the backend
    Unsupported,
    /// The input tree is malformed
    InvalidArgument,
    /// The backend rejected a call
    Delegate,
}

/// Error raised while visiting a filter tree or building a backend query
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Unsupported construct
    #[error("{code}: {message}")]
    Unsupported { code: ErrorCode, message: String },

    /// Malformed input (missing values, bad arity, failed conversion)
    #[error("{code}: {message}")]
    InvalidArgument { code: ErrorCode, message: String },

    /// Failure reported by the query delegate
    #[error("{code}: {message}")]
    Delegate { code: ErrorCode, message: String },
}

impl FilterError {
    /// Create an unsupported-construct error
    pub fn unsupported(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Unsupported {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
        }
    }

    /// Create a delegate error
    pub fn delegate(message: impl Into<String>) -> Self {
        Self::Delegate {
            code: FLT0200,
            message: message.into(),
        }
    }

    /// Predicate kind that can never be translated
    pub fn unsupported_predicate(kind: &str) -> Self {
        Self::unsupported(FLT0001, format!("{kind} is not supported"))
    }

    /// Expression kind that can never be translated
    pub fn unsupported_expression(kind: &str) -> Self {
        Self::unsupported(FLT0002, format!("{kind} expressions are not supported"))
    }

    /// Delegate operation the backend did not implement
    pub fn unsupported_operation(operation: &str) -> Self {
        Self::unsupported(
            FLT0008,
            format!("operation '{operation}' is not supported by this backend"),
        )
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unsupported { code, .. }
            | Self::InvalidArgument { code, .. }
            | Self::Delegate { code, .. } => *code,
        }
    }

    /// Get the error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Delegate { .. } => ErrorKind::Delegate,
        }
    }

    /// Get the bare message, without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Unsupported { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::Delegate { message, .. } => message,
        }
    }
}
