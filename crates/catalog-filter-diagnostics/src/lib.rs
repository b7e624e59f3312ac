//! Filter translation diagnostics
//!
//! This crate provides the error taxonomy shared by the filter AST, the
//! type/coercion layer, the translation engine and query delegates.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
