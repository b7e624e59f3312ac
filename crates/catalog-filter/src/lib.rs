//! OGC-style catalog filter translation for Rust
//!
//! This crate compiles backend-neutral filter trees into calls on a
//! pluggable query delegate:
//! - Predicate and expression trees with serde support
//! - Literal coercion, relative durations and distance units
//! - The translation engine and the `FilterDelegate` contract
//!
//! # Example
//!
//! ```
//! use catalog_filter::build::{during, literal, property};
//! use catalog_filter::{FilterDelegate, FilterTranslator, Result};
//!
//! struct Recent;
//!
//! impl FilterDelegate for Recent {
//!     type Output = String;
//!
//!     fn relative(&self, property: &str, duration_millis: i64) -> Result<String> {
//!         Ok(format!("{property} within last {duration_millis}ms"))
//!     }
//! }
//!
//! let filter = during(property("modified"), literal("RELATIVE(PT1H)"));
//! let query = FilterTranslator::new().translate(Some(&filter), &Recent).unwrap();
//! assert_eq!(query, "modified within last 3600000ms");
//! ```

// Re-export all public APIs from internal crates
pub use catalog_filter_ast as ast;
pub use catalog_filter_diagnostics as diagnostics;
pub use catalog_filter_translate as translate;
pub use catalog_filter_types as types;

// Convenience re-exports
pub use catalog_filter_ast::build;
pub use catalog_filter_ast::{Expression, Geometry, Predicate, TypedValue, ValueKind};
pub use catalog_filter_diagnostics::{ErrorCode, FilterError, Result};
pub use catalog_filter_translate::{
    FilterDelegate, FilterTranslator, TranslateError, TranslateResult, TranslatorConfig,
};
pub use catalog_filter_types::RelativeDuration;
