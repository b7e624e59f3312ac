//! Filter error codes following a structured numbering system
//!
//! Error code ranges:
//! - FLT0001-FLT0099: Unsupported constructs
//! - FLT0100-FLT0199: Invalid arguments
//! - FLT0200-FLT0299: Delegate (backend) failures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an unsupported-construct error (0001-0099)
    pub const fn is_unsupported(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an invalid-argument error (0100-0199)
    pub const fn is_invalid_argument(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a delegate error (0200-0299)
    pub const fn is_delegate_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FLT{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Unsupported constructs (0001-0099)
    map.insert(1, ErrorInfo::new("Unsupported predicate"));
    map.insert(2, ErrorInfo::new("Unsupported expression"));
    map.insert(
        3,
        ErrorInfo::new("Unsupported operand combination")
            .with_help("Use a property or function on one side and a literal on the other"),
    );
    map.insert(
        4,
        ErrorInfo::new("Invalid like control characters")
            .with_help("Wildcard, single and escape characters must be distinct single characters"),
    );
    map.insert(5, ErrorInfo::new("Unknown distance unit"));
    map.insert(6, ErrorInfo::new("Unsupported geometry encoding"));
    map.insert(7, ErrorInfo::new("Unsupported literal type for operation"));
    map.insert(8, ErrorInfo::new("Operation not supported by this backend"));
    map.insert(9, ErrorInfo::new("No valid operands for logical operator"));

    // Invalid arguments (0100-0199)
    map.insert(100, ErrorInfo::new("Missing filter"));
    map.insert(101, ErrorInfo::new("Missing literal value"));
    map.insert(102, ErrorInfo::new("Missing property name"));
    map.insert(103, ErrorInfo::new("Function argument count mismatch"));
    map.insert(104, ErrorInfo::new("Literal conversion failed"));
    map.insert(
        105,
        ErrorInfo::new("Invalid relative duration")
            .with_help("Expected an ISO-8601 duration such as RELATIVE(P1DT12H)"),
    );
    map.insert(106, ErrorInfo::new("Maximum predicate depth exceeded"));
    map.insert(107, ErrorInfo::new("Date arithmetic out of range"));
    map.insert(108, ErrorInfo::new("Distance is not a finite number"));

    // Delegate errors (0200-0299)
    map.insert(200, ErrorInfo::new("Backend query construction failed"));

    map
});

// Unsupported constructs
pub const FLT0001: ErrorCode = ErrorCode::new(1);
pub const FLT0002: ErrorCode = ErrorCode::new(2);
pub const FLT0003: ErrorCode = ErrorCode::new(3);
pub const FLT0004: ErrorCode = ErrorCode::new(4);
pub const FLT0005: ErrorCode = ErrorCode::new(5);
pub const FLT0006: ErrorCode = ErrorCode::new(6);
pub const FLT0007: ErrorCode = ErrorCode::new(7);
pub const FLT0008: ErrorCode = ErrorCode::new(8);
pub const FLT0009: ErrorCode = ErrorCode::new(9);

// Invalid arguments
pub const FLT0100: ErrorCode = ErrorCode::new(100);
pub const FLT0101: ErrorCode = ErrorCode::new(101);
pub const FLT0102: ErrorCode = ErrorCode::new(102);
pub const FLT0103: ErrorCode = ErrorCode::new(103);
pub const FLT0104: ErrorCode = ErrorCode::new(104);
pub const FLT0105: ErrorCode = ErrorCode::new(105);
pub const FLT0106: ErrorCode = ErrorCode::new(106);
pub const FLT0107: ErrorCode = ErrorCode::new(107);
pub const FLT0108: ErrorCode = ErrorCode::new(108);

// Delegate errors
pub const FLT0200: ErrorCode = ErrorCode::new(200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(FLT0001.to_string(), "FLT0001");
        assert_eq!(FLT0105.to_string(), "FLT0105");
    }

    #[test]
    fn test_error_categories() {
        assert!(FLT0004.is_unsupported());
        assert!(!FLT0004.is_invalid_argument());

        assert!(FLT0101.is_invalid_argument());
        assert!(!FLT0101.is_unsupported());

        assert!(FLT0200.is_delegate_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(FLT0005.info().description, "Unknown distance unit");
        assert!(FLT0105.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
