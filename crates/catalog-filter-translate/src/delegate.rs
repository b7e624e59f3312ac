//! Query delegate contract
//!
//! A delegate turns individual filter operations into a backend's native
//! query form (SQL fragments, index queries, ...). The translator calls
//! exactly one delegate method per predicate node and feeds the returned
//! values into the enclosing combinator.
//!
//! Every method has a default body reporting the operation as unsupported,
//! so a backend implements only what it can express. An unsupported
//! operation aborts the whole translation.
//!
//! Like patterns reach the delegate in canonical form: [`WILDCARD`] matches
//! any run of characters, [`SINGLE_CHAR`] exactly one, and [`ESCAPE`]
//! precedes a literal control character.

use catalog_filter_ast::TypedValue;
use catalog_filter_diagnostics::{FilterError, Result};
use chrono::{DateTime, Utc};

pub use crate::operators::like::{ESCAPE, SINGLE_CHAR, WILDCARD};

fn unsupported<T>(operation: &str) -> Result<T> {
    Err(FilterError::unsupported_operation(operation))
}

/// Backend-specific query builder driven by the translator
pub trait FilterDelegate {
    /// Backend query fragment
    type Output;

    // === Combinators ===

    fn and(&self, _operands: Vec<Self::Output>) -> Result<Self::Output> {
        unsupported("and")
    }

    fn or(&self, _operands: Vec<Self::Output>) -> Result<Self::Output> {
        unsupported("or")
    }

    fn not(&self, _operand: Self::Output) -> Result<Self::Output> {
        unsupported("not")
    }

    /// Match every record
    fn include(&self) -> Result<Self::Output> {
        unsupported("include")
    }

    /// Match no record
    fn exclude(&self) -> Result<Self::Output> {
        unsupported("exclude")
    }

    // === Equality ===

    fn equal_to_string(
        &self,
        _property: &str,
        _value: &str,
        _match_case: bool,
    ) -> Result<Self::Output> {
        unsupported("equal_to_string")
    }

    fn equal_to_date(&self, _property: &str, _value: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("equal_to_date")
    }

    fn equal_to_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("equal_to_date_range")
    }

    fn equal_to_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("equal_to_int")
    }

    fn equal_to_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("equal_to_short")
    }

    fn equal_to_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("equal_to_long")
    }

    fn equal_to_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("equal_to_float")
    }

    fn equal_to_double(&self, _property: &str, _value: f64) -> Result<Self::Output> {
        unsupported("equal_to_double")
    }

    fn equal_to_bool(&self, _property: &str, _value: bool) -> Result<Self::Output> {
        unsupported("equal_to_bool")
    }

    fn equal_to_bytes(&self, _property: &str, _value: &[u8]) -> Result<Self::Output> {
        unsupported("equal_to_bytes")
    }

    /// Fallback for literal kinds without a typed overload
    fn equal_to_value(&self, _property: &str, _value: &TypedValue) -> Result<Self::Output> {
        unsupported("equal_to_value")
    }

    /// Equality between a function result and a literal
    fn equal_to_function(
        &self,
        _function: &str,
        _arguments: &[TypedValue],
        _value: &TypedValue,
    ) -> Result<Self::Output> {
        unsupported("equal_to_function")
    }

    // === Inequality ===

    fn not_equal_to_string(
        &self,
        _property: &str,
        _value: &str,
        _match_case: bool,
    ) -> Result<Self::Output> {
        unsupported("not_equal_to_string")
    }

    fn not_equal_to_date(&self, _property: &str, _value: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("not_equal_to_date")
    }

    fn not_equal_to_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("not_equal_to_date_range")
    }

    fn not_equal_to_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("not_equal_to_int")
    }

    fn not_equal_to_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("not_equal_to_short")
    }

    fn not_equal_to_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("not_equal_to_long")
    }

    fn not_equal_to_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("not_equal_to_float")
    }

    fn not_equal_to_double(&self, _property: &str, _value: f64) -> Result<Self::Output> {
        unsupported("not_equal_to_double")
    }

    fn not_equal_to_bool(&self, _property: &str, _value: bool) -> Result<Self::Output> {
        unsupported("not_equal_to_bool")
    }

    fn not_equal_to_bytes(&self, _property: &str, _value: &[u8]) -> Result<Self::Output> {
        unsupported("not_equal_to_bytes")
    }

    /// Fallback for literal kinds without a typed overload
    fn not_equal_to_value(&self, _property: &str, _value: &TypedValue) -> Result<Self::Output> {
        unsupported("not_equal_to_value")
    }

    // === Greater than ===

    fn greater_than_string(&self, _property: &str, _value: &str) -> Result<Self::Output> {
        unsupported("greater_than_string")
    }

    fn greater_than_date(&self, _property: &str, _value: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("greater_than_date")
    }

    fn greater_than_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("greater_than_date_range")
    }

    fn greater_than_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("greater_than_int")
    }

    fn greater_than_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("greater_than_short")
    }

    fn greater_than_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("greater_than_long")
    }

    fn greater_than_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("greater_than_float")
    }

    fn greater_than_double(&self, _property: &str, _value: f64) -> Result<Self::Output> {
        unsupported("greater_than_double")
    }

    /// Fallback for literal kinds without a typed overload (including Boolean and Bytes)
    fn greater_than_value(&self, _property: &str, _value: &TypedValue) -> Result<Self::Output> {
        unsupported("greater_than_value")
    }

    // === Greater than or equal ===

    fn greater_than_or_equal_to_string(
        &self,
        _property: &str,
        _value: &str,
    ) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_string")
    }

    fn greater_than_or_equal_to_date(
        &self,
        _property: &str,
        _value: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_date")
    }

    fn greater_than_or_equal_to_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_date_range")
    }

    fn greater_than_or_equal_to_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_int")
    }

    fn greater_than_or_equal_to_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_short")
    }

    fn greater_than_or_equal_to_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_long")
    }

    fn greater_than_or_equal_to_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_float")
    }

    fn greater_than_or_equal_to_double(
        &self,
        _property: &str,
        _value: f64,
    ) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_double")
    }

    /// Fallback for literal kinds without a typed overload (including Boolean and Bytes)
    fn greater_than_or_equal_to_value(
        &self,
        _property: &str,
        _value: &TypedValue,
    ) -> Result<Self::Output> {
        unsupported("greater_than_or_equal_to_value")
    }

    // === Less than ===

    fn less_than_string(&self, _property: &str, _value: &str) -> Result<Self::Output> {
        unsupported("less_than_string")
    }

    fn less_than_date(&self, _property: &str, _value: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("less_than_date")
    }

    fn less_than_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("less_than_date_range")
    }

    fn less_than_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("less_than_int")
    }

    fn less_than_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("less_than_short")
    }

    fn less_than_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("less_than_long")
    }

    fn less_than_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("less_than_float")
    }

    fn less_than_double(&self, _property: &str, _value: f64) -> Result<Self::Output> {
        unsupported("less_than_double")
    }

    /// Fallback for literal kinds without a typed overload (including Boolean and Bytes)
    fn less_than_value(&self, _property: &str, _value: &TypedValue) -> Result<Self::Output> {
        unsupported("less_than_value")
    }

    // === Less than or equal ===

    fn less_than_or_equal_to_string(&self, _property: &str, _value: &str) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_string")
    }

    fn less_than_or_equal_to_date(
        &self,
        _property: &str,
        _value: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_date")
    }

    fn less_than_or_equal_to_date_range(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_date_range")
    }

    fn less_than_or_equal_to_int(&self, _property: &str, _value: i32) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_int")
    }

    fn less_than_or_equal_to_short(&self, _property: &str, _value: i16) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_short")
    }

    fn less_than_or_equal_to_long(&self, _property: &str, _value: i64) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_long")
    }

    fn less_than_or_equal_to_float(&self, _property: &str, _value: f32) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_float")
    }

    fn less_than_or_equal_to_double(&self, _property: &str, _value: f64) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_double")
    }

    /// Fallback for literal kinds without a typed overload (including Boolean and Bytes)
    fn less_than_or_equal_to_value(
        &self,
        _property: &str,
        _value: &TypedValue,
    ) -> Result<Self::Output> {
        unsupported("less_than_or_equal_to_value")
    }

    // === Range and null ===

    fn between_string(&self, _property: &str, _lower: &str, _upper: &str) -> Result<Self::Output> {
        unsupported("between_string")
    }

    fn between_date(
        &self,
        _property: &str,
        _lower: DateTime<Utc>,
        _upper: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("between_date")
    }

    fn between_int(&self, _property: &str, _lower: i32, _upper: i32) -> Result<Self::Output> {
        unsupported("between_int")
    }

    fn between_short(&self, _property: &str, _lower: i16, _upper: i16) -> Result<Self::Output> {
        unsupported("between_short")
    }

    fn between_long(&self, _property: &str, _lower: i64, _upper: i64) -> Result<Self::Output> {
        unsupported("between_long")
    }

    fn between_float(&self, _property: &str, _lower: f32, _upper: f32) -> Result<Self::Output> {
        unsupported("between_float")
    }

    fn between_double(&self, _property: &str, _lower: f64, _upper: f64) -> Result<Self::Output> {
        unsupported("between_double")
    }

    /// Bounds of different or untyped kinds
    fn between_value(
        &self,
        _property: &str,
        _lower: &TypedValue,
        _upper: &TypedValue,
    ) -> Result<Self::Output> {
        unsupported("between_value")
    }

    fn is_null(&self, _property: &str) -> Result<Self::Output> {
        unsupported("is_null")
    }

    // === Pattern matching ===

    fn like(&self, _property: &str, _pattern: &str, _match_case: bool) -> Result<Self::Output> {
        unsupported("like")
    }

    fn fuzzy_like(&self, _property: &str, _pattern: &str) -> Result<Self::Output> {
        unsupported("fuzzy_like")
    }

    fn xpath_like(&self, _xpath: &str, _pattern: &str, _match_case: bool) -> Result<Self::Output> {
        unsupported("xpath_like")
    }

    /// The xpath selects at least one node
    fn xpath_exists(&self, _xpath: &str) -> Result<Self::Output> {
        unsupported("xpath_exists")
    }

    fn xpath_fuzzy_like(&self, _xpath: &str, _pattern: &str) -> Result<Self::Output> {
        unsupported("xpath_fuzzy_like")
    }

    // === Spatial ===

    fn beyond(&self, _property: &str, _wkt: &str, _meters: f64) -> Result<Self::Output> {
        unsupported("beyond")
    }

    /// Records ordered by distance to the geometry
    fn nearest_neighbor(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("nearest_neighbor")
    }

    fn dwithin(&self, _property: &str, _wkt: &str, _meters: f64) -> Result<Self::Output> {
        unsupported("dwithin")
    }

    fn contains(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("contains")
    }

    fn crosses(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("crosses")
    }

    fn disjoint(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("disjoint")
    }

    fn intersects(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("intersects")
    }

    fn overlaps(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("overlaps")
    }

    fn touches(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("touches")
    }

    fn within(&self, _property: &str, _wkt: &str) -> Result<Self::Output> {
        unsupported("within")
    }

    // === Temporal ===

    fn after(&self, _property: &str, _date: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("after")
    }

    fn before(&self, _property: &str, _date: DateTime<Utc>) -> Result<Self::Output> {
        unsupported("before")
    }

    fn during(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("during")
    }

    /// Within the given number of milliseconds before now
    fn relative(&self, _property: &str, _duration_millis: i64) -> Result<Self::Output> {
        unsupported("relative")
    }

    fn begins(
        &self,
        _property: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Self::Output> {
        unsupported("begins")
    }
}
