//! Catalog filter translation
//!
//! This crate compiles backend-neutral predicate trees into calls on a
//! backend-specific [`FilterDelegate`].
//!
//! ## Example
//!
//! ```
//! use catalog_filter_ast::build::{and, equal, greater_than, literal, property};
//! use catalog_filter_diagnostics::Result;
//! use catalog_filter_translate::{FilterDelegate, FilterTranslator};
//!
//! struct Sql;
//!
//! impl FilterDelegate for Sql {
//!     type Output = String;
//!
//!     fn and(&self, operands: Vec<String>) -> Result<String> {
//!         Ok(operands.join(" AND "))
//!     }
//!
//!     fn equal_to_string(&self, property: &str, value: &str, _match_case: bool) -> Result<String> {
//!         Ok(format!("{property} = '{value}'"))
//!     }
//!
//!     fn less_than_int(&self, property: &str, value: i32) -> Result<String> {
//!         Ok(format!("{property} < {value}"))
//!     }
//! }
//!
//! let filter = and(vec![
//!     equal(property("title"), literal("roads")),
//!     greater_than(literal(10), property("scale")),
//! ]);
//! let sql = FilterTranslator::new().translate(Some(&filter), &Sql).unwrap();
//! assert_eq!(sql, "title = 'roads' AND scale < 10");
//! ```

pub mod config;
pub mod context;
pub mod delegate;
pub mod engine;
pub mod error;
pub mod operators;

pub use config::{FilterTranslatorBuilder, TranslatorConfig};
pub use context::TranslationContext;
pub use delegate::{ESCAPE, FilterDelegate, SINGLE_CHAR, WILDCARD};
pub use engine::{FilterTranslator, translate};
pub use error::{TranslateError, TranslateResult};
pub use operators::{ComparisonOp, LikeControls, NEAREST_NEIGHBOR_EPSILON, SpatialOp, canonicalize};
