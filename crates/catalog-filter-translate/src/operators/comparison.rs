//! Comparison predicates
//!
//! Implements: Equal, NotEqual, GreaterThan, GreaterThanOrEqual, LessThan,
//! LessThanOrEqual, Between, IsNull.
//! Each comparison picks the delegate overload matching the literal kind.

use crate::context::TranslationContext;
use crate::delegate::FilterDelegate;
use crate::engine::FilterTranslator;
use crate::operators::expression::Operand;
use catalog_filter_ast::{BetweenPredicate, BinaryComparison, Expression, TypedValue};
use catalog_filter_diagnostics::{FLT0003, FilterError, Result};
use catalog_filter_types::parse_relative_token;
use chrono::{DateTime, Utc};
use std::fmt;

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ComparisonOp {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
        }
    }

    pub const fn is_ordered(&self) -> bool {
        !matches!(self, Self::Equal | Self::NotEqual)
    }

    /// The operator that holds with the operands swapped
    pub const fn mirror(&self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::GreaterThan => Self::LessThan,
            Self::GreaterThanOrEqual => Self::LessThanOrEqual,
            Self::LessThan => Self::GreaterThan,
            Self::LessThanOrEqual => Self::GreaterThanOrEqual,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite an ordered comparison whose literal is on the left
///
/// Returns `None` when the comparison is already in property-first form.
pub fn canonicalize(
    op: ComparisonOp,
    comparison: &BinaryComparison,
) -> Option<(ComparisonOp, BinaryComparison)> {
    let literal_first = comparison.left.is_literal() && !comparison.right.is_literal();
    (op.is_ordered() && literal_first).then(|| (op.mirror(), comparison.swapped()))
}

type Call<D, T> = fn(&D, &str, T) -> Result<<D as FilterDelegate>::Output>;

/// Delegate overloads of one comparison operator, keyed by literal kind
struct ComparisonCalls<D: FilterDelegate> {
    string: fn(&D, &str, &str, bool) -> Result<D::Output>,
    date: Call<D, DateTime<Utc>>,
    date_range: fn(&D, &str, DateTime<Utc>, DateTime<Utc>) -> Result<D::Output>,
    int: Call<D, i32>,
    short: Call<D, i16>,
    long: Call<D, i64>,
    float: Call<D, f32>,
    double: Call<D, f64>,
    /// `None` routes booleans to the generic overload
    boolean: Option<Call<D, bool>>,
    /// `None` routes byte strings to the generic overload
    bytes: Option<fn(&D, &str, &[u8]) -> Result<D::Output>>,
    value: fn(&D, &str, &TypedValue) -> Result<D::Output>,
}

impl<D: FilterDelegate> ComparisonCalls<D> {
    fn of(op: ComparisonOp) -> Self {
        match op {
            ComparisonOp::Equal => Self {
                string: D::equal_to_string,
                date: D::equal_to_date,
                date_range: D::equal_to_date_range,
                int: D::equal_to_int,
                short: D::equal_to_short,
                long: D::equal_to_long,
                float: D::equal_to_float,
                double: D::equal_to_double,
                boolean: Some(D::equal_to_bool),
                bytes: Some(D::equal_to_bytes),
                value: D::equal_to_value,
            },
            ComparisonOp::NotEqual => Self {
                string: D::not_equal_to_string,
                date: D::not_equal_to_date,
                date_range: D::not_equal_to_date_range,
                int: D::not_equal_to_int,
                short: D::not_equal_to_short,
                long: D::not_equal_to_long,
                float: D::not_equal_to_float,
                double: D::not_equal_to_double,
                boolean: Some(D::not_equal_to_bool),
                bytes: Some(D::not_equal_to_bytes),
                value: D::not_equal_to_value,
            },
            ComparisonOp::GreaterThan => Self {
                string: |d, property, value, _| d.greater_than_string(property, value),
                date: D::greater_than_date,
                date_range: D::greater_than_date_range,
                int: D::greater_than_int,
                short: D::greater_than_short,
                long: D::greater_than_long,
                float: D::greater_than_float,
                double: D::greater_than_double,
                boolean: None,
                bytes: None,
                value: D::greater_than_value,
            },
            ComparisonOp::GreaterThanOrEqual => Self {
                string: |d, property, value, _| d.greater_than_or_equal_to_string(property, value),
                date: D::greater_than_or_equal_to_date,
                date_range: D::greater_than_or_equal_to_date_range,
                int: D::greater_than_or_equal_to_int,
                short: D::greater_than_or_equal_to_short,
                long: D::greater_than_or_equal_to_long,
                float: D::greater_than_or_equal_to_float,
                double: D::greater_than_or_equal_to_double,
                boolean: None,
                bytes: None,
                value: D::greater_than_or_equal_to_value,
            },
            ComparisonOp::LessThan => Self {
                string: |d, property, value, _| d.less_than_string(property, value),
                date: D::less_than_date,
                date_range: D::less_than_date_range,
                int: D::less_than_int,
                short: D::less_than_short,
                long: D::less_than_long,
                float: D::less_than_float,
                double: D::less_than_double,
                boolean: None,
                bytes: None,
                value: D::less_than_value,
            },
            ComparisonOp::LessThanOrEqual => Self {
                string: |d, property, value, _| d.less_than_or_equal_to_string(property, value),
                date: D::less_than_or_equal_to_date,
                date_range: D::less_than_or_equal_to_date_range,
                int: D::less_than_or_equal_to_int,
                short: D::less_than_or_equal_to_short,
                long: D::less_than_or_equal_to_long,
                float: D::less_than_or_equal_to_float,
                double: D::less_than_or_equal_to_double,
                boolean: None,
                bytes: None,
                value: D::less_than_or_equal_to_value,
            },
        }
    }

    fn dispatch(
        &self,
        delegate: &D,
        property: &str,
        literal: &TypedValue,
        match_case: bool,
    ) -> Result<D::Output> {
        match literal {
            TypedValue::String(value) => (self.string)(delegate, property, value, match_case),
            TypedValue::Date(date) | TypedValue::Instant(date) => {
                (self.date)(delegate, property, *date)
            }
            TypedValue::DateRange { start, end } => {
                (self.date_range)(delegate, property, *start, *end)
            }
            TypedValue::Integer(value) => (self.int)(delegate, property, *value),
            TypedValue::Short(value) => (self.short)(delegate, property, *value),
            TypedValue::Long(value) => (self.long)(delegate, property, *value),
            TypedValue::Float(value) => (self.float)(delegate, property, *value),
            TypedValue::Double(value) => (self.double)(delegate, property, *value),
            TypedValue::Boolean(value) => match self.boolean {
                Some(call) => call(delegate, property, *value),
                None => (self.value)(delegate, property, literal),
            },
            TypedValue::Bytes(value) => match self.bytes {
                Some(call) => call(delegate, property, value),
                None => (self.value)(delegate, property, literal),
            },
            TypedValue::Geometry(_) | TypedValue::Duration(_) => {
                (self.value)(delegate, property, literal)
            }
        }
    }
}

impl FilterTranslator {
    /// Translate a binary comparison
    pub(crate) fn visit_comparison<D: FilterDelegate>(
        &self,
        op: ComparisonOp,
        comparison: &BinaryComparison,
        delegate: &D,
        ctx: &TranslationContext,
    ) -> Result<D::Output> {
        match canonicalize(op, comparison) {
            Some((mirrored, rewritten)) => {
                log::trace!("rewriting {op} with a leading literal as {mirrored}");
                self.dispatch_comparison(mirrored, &rewritten, delegate, ctx)
            }
            None => self.dispatch_comparison(op, comparison, delegate, ctx),
        }
    }

    fn dispatch_comparison<D: FilterDelegate>(
        &self,
        op: ComparisonOp,
        comparison: &BinaryComparison,
        delegate: &D,
        ctx: &TranslationContext,
    ) -> Result<D::Output> {
        match self.extract_operand(&comparison.left, &comparison.right, None)? {
            Operand::Function {
                name,
                args,
                literal,
            } if op == ComparisonOp::Equal => delegate.equal_to_function(&name, &args, &literal),
            Operand::Function { name, .. } => Err(FilterError::unsupported(
                FLT0003,
                format!("{op} does not accept function operand '{name}'"),
            )),
            Operand::Property { name, literal } => {
                let relative = match literal.as_str() {
                    Some(text) if op == ComparisonOp::Equal => parse_relative_token(text)?,
                    _ => None,
                };
                if let Some(duration) = relative {
                    let now = ctx.now();
                    let start = duration.subtract_from(now)?;
                    log::trace!("expanding relative equality on '{name}' ({duration})");
                    return delegate.between_date(&name, start, now);
                }
                ComparisonCalls::of(op).dispatch(delegate, &name, &literal, comparison.match_case)
            }
        }
    }

    /// Translate a range test
    pub(crate) fn visit_between<D: FilterDelegate>(
        &self,
        between: &BetweenPredicate,
        delegate: &D,
    ) -> Result<D::Output> {
        let name = self.visit_property(&between.expression)?;
        let lower = self.visit_literal(&between.lower, None)?;
        let upper = self.visit_literal(&between.upper, None)?;

        match (&lower, &upper) {
            (TypedValue::String(lo), TypedValue::String(hi)) => {
                delegate.between_string(&name, lo, hi)
            }
            (TypedValue::Date(lo), TypedValue::Date(hi)) => delegate.between_date(&name, *lo, *hi),
            (TypedValue::Integer(lo), TypedValue::Integer(hi)) => {
                delegate.between_int(&name, *lo, *hi)
            }
            (TypedValue::Short(lo), TypedValue::Short(hi)) => {
                delegate.between_short(&name, *lo, *hi)
            }
            (TypedValue::Long(lo), TypedValue::Long(hi)) => delegate.between_long(&name, *lo, *hi),
            (TypedValue::Float(lo), TypedValue::Float(hi)) => {
                delegate.between_float(&name, *lo, *hi)
            }
            (TypedValue::Double(lo), TypedValue::Double(hi)) => {
                delegate.between_double(&name, *lo, *hi)
            }
            _ => delegate.between_value(&name, &lower, &upper),
        }
    }

    pub(crate) fn visit_is_null<D: FilterDelegate>(
        &self,
        expression: &Expression,
        delegate: &D,
    ) -> Result<D::Output> {
        match expression {
            Expression::PropertyRef(_) => delegate.is_null(&self.visit_property(expression)?),
            Expression::Literal(_) | Expression::Function(_) => Err(FilterError::unsupported(
                FLT0003,
                format!("IsNull requires a PropertyRef, found {}", expression.kind_name()),
            )),
            other => Err(FilterError::unsupported_expression(other.kind_name())),
        }
    }
}
