//! Constructor functions for filter trees
//!
//! These are plain functions so callers (query-language front ends, tests)
//! can assemble trees without holding a factory object.
//!
//! ```
//! use catalog_filter_ast::build::{and, equal, greater_than, literal, property};
//!
//! let filter = and(vec![
//!     equal(property("title"), literal("roads")),
//!     greater_than(property("size"), literal(10)),
//! ]);
//! assert_eq!(filter.kind_name(), "And");
//! ```

use crate::{
    BetweenPredicate, BinaryComparison, DistanceOperands, Expression, FunctionCall, Geometry,
    LikePredicate, Operands, Predicate, TypedValue,
};
use chrono::{DateTime, Utc};

/// Default wildcard control character for [`like`]
pub const DEFAULT_WILDCARD: &str = "*";
/// Default single-character control character for [`like`]
pub const DEFAULT_SINGLE_CHAR: &str = "?";
/// Default escape control character for [`like`]
pub const DEFAULT_ESCAPE: &str = "\\";

// === Expressions ===

pub fn property(name: impl Into<String>) -> Expression {
    Expression::PropertyRef(name.into())
}

pub fn literal(value: impl Into<TypedValue>) -> Expression {
    Expression::Literal(Some(value.into()))
}

pub fn null_literal() -> Expression {
    Expression::Literal(None)
}

pub fn geometry(value: Geometry) -> Expression {
    Expression::Literal(Some(TypedValue::Geometry(value)))
}

pub fn period(start: DateTime<Utc>, end: DateTime<Utc>) -> Expression {
    Expression::Literal(Some(TypedValue::DateRange { start, end }))
}

pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Expression {
    Expression::Function(FunctionCall::new(name, args))
}

// === Logical ===

pub fn and(children: Vec<Predicate>) -> Predicate {
    Predicate::And(children)
}

pub fn or(children: Vec<Predicate>) -> Predicate {
    Predicate::Or(children)
}

pub fn not(child: Predicate) -> Predicate {
    Predicate::Not(Box::new(child))
}

// === Comparison ===

pub fn equal(left: Expression, right: Expression) -> Predicate {
    Predicate::Equal(BinaryComparison::new(left, right))
}

/// Case-insensitive string equality
pub fn equal_ignore_case(left: Expression, right: Expression) -> Predicate {
    Predicate::Equal(BinaryComparison {
        match_case: false,
        ..BinaryComparison::new(left, right)
    })
}

pub fn not_equal(left: Expression, right: Expression) -> Predicate {
    Predicate::NotEqual(BinaryComparison::new(left, right))
}

pub fn greater_than(left: Expression, right: Expression) -> Predicate {
    Predicate::GreaterThan(BinaryComparison::new(left, right))
}

pub fn greater_than_or_equal(left: Expression, right: Expression) -> Predicate {
    Predicate::GreaterThanOrEqual(BinaryComparison::new(left, right))
}

pub fn less_than(left: Expression, right: Expression) -> Predicate {
    Predicate::LessThan(BinaryComparison::new(left, right))
}

pub fn less_than_or_equal(left: Expression, right: Expression) -> Predicate {
    Predicate::LessThanOrEqual(BinaryComparison::new(left, right))
}

pub fn between(expression: Expression, lower: Expression, upper: Expression) -> Predicate {
    Predicate::Between(BetweenPredicate {
        expression,
        lower,
        upper,
    })
}

/// Case-sensitive like using `*`, `?` and `\` as control characters
pub fn like(expression: Expression, pattern: impl Into<String>) -> Predicate {
    like_with(
        expression,
        pattern,
        DEFAULT_WILDCARD,
        DEFAULT_SINGLE_CHAR,
        DEFAULT_ESCAPE,
        true,
    )
}

pub fn like_with(
    expression: Expression,
    pattern: impl Into<String>,
    wildcard: impl Into<String>,
    single_char: impl Into<String>,
    escape: impl Into<String>,
    match_case: bool,
) -> Predicate {
    Predicate::Like(LikePredicate {
        expression,
        pattern: pattern.into(),
        wildcard: wildcard.into(),
        single_char: single_char.into(),
        escape: escape.into(),
        match_case,
    })
}

pub fn is_null(expression: Expression) -> Predicate {
    Predicate::IsNull(expression)
}

// === Spatial ===

pub fn intersects(left: Expression, right: Expression) -> Predicate {
    Predicate::Intersects(Operands::new(left, right))
}

pub fn contains(left: Expression, right: Expression) -> Predicate {
    Predicate::Contains(Operands::new(left, right))
}

pub fn within(left: Expression, right: Expression) -> Predicate {
    Predicate::Within(Operands::new(left, right))
}

pub fn dwithin(left: Expression, right: Expression, distance: f64, unit: &str) -> Predicate {
    Predicate::DWithin(DistanceOperands {
        left,
        right,
        distance,
        unit: unit.to_string(),
    })
}

pub fn beyond(left: Expression, right: Expression, distance: f64, unit: &str) -> Predicate {
    Predicate::Beyond(DistanceOperands {
        left,
        right,
        distance,
        unit: unit.to_string(),
    })
}

// === Temporal ===

pub fn after(left: Expression, right: Expression) -> Predicate {
    Predicate::After(Operands::new(left, right))
}

pub fn before(left: Expression, right: Expression) -> Predicate {
    Predicate::Before(Operands::new(left, right))
}

pub fn during(left: Expression, right: Expression) -> Predicate {
    Predicate::During(Operands::new(left, right))
}

pub fn begins(left: Expression, right: Expression) -> Predicate {
    Predicate::Begins(Operands::new(left, right))
}
