//! Catalog filter value semantics
//!
//! This crate holds the rules that give filter literals meaning:
//! - Literal coercion between value kinds
//! - Relative ("look back from now") durations
//! - Distance units for proximity relations

pub mod coercion;
pub mod duration;
pub mod units;

pub use coercion::{CoercionError, CoercionRegistry, CoercionResult, ConversionFn};
pub use duration::{DurationError, RelativeDuration, parse_relative_token};
pub use units::{DistanceUnit, distance_in_meters};
