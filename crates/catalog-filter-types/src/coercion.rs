//! Literal coercion rules
//!
//! Literals are converted to a caller-supplied target kind (a function's
//! declared parameter kind, the geometry operand of a spatial relation)
//! through a registry of conversion functions keyed by
//! `(source kind, target kind)`. A value already of the target kind is
//! returned unchanged; a missing entry is a conversion failure.

use catalog_filter_ast::{Geometry, TypedValue, ValueKind};
use catalog_filter_diagnostics::{FLT0104, FilterError};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// No conversion registered between the kinds
    #[error("Cannot convert from {from} to {to}")]
    CannotConvert { from: ValueKind, to: ValueKind },

    /// Source text does not parse as the target kind
    #[error("Cannot convert '{value}' to {to}: {message}")]
    InvalidFormat {
        value: String,
        to: ValueKind,
        message: String,
    },

    /// Numeric value does not fit the target kind
    #[error("Value {value} is out of range for {to}")]
    OutOfRange { value: String, to: ValueKind },
}

/// Coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

impl From<CoercionError> for FilterError {
    fn from(err: CoercionError) -> Self {
        FilterError::invalid_argument(FLT0104, err.to_string())
    }
}

/// A single conversion; receives the value and the requested target kind
pub type ConversionFn = fn(&TypedValue, ValueKind) -> CoercionResult<TypedValue>;

/// Registry of literal conversions
#[derive(Debug, Clone, Default)]
pub struct CoercionRegistry {
    conversions: HashMap<(ValueKind, ValueKind), ConversionFn>,
}

static STANDARD: LazyLock<CoercionRegistry> = LazyLock::new(CoercionRegistry::standard);

impl CoercionRegistry {
    /// Create an empty registry (identity conversions only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry with the standard conversions
    pub fn shared() -> &'static CoercionRegistry {
        &STANDARD
    }

    /// Create a registry with the standard conversions
    ///
    /// - text parses into numbers, booleans, dates and WKT geometries
    /// - integers widen (Short -> Integer -> Long -> Float/Double) and
    ///   narrow with range checks
    /// - Float widens to Double
    /// - Date and Instant convert into each other
    /// - scalars render to text
    pub fn standard() -> Self {
        use ValueKind as K;

        let mut registry = Self::new();

        registry.register(K::String, K::Integer, |v, to| parse_text(v, to, TypedValue::Integer));
        registry.register(K::String, K::Short, |v, to| parse_text(v, to, TypedValue::Short));
        registry.register(K::String, K::Long, |v, to| parse_text(v, to, TypedValue::Long));
        registry.register(K::String, K::Float, |v, to| parse_text(v, to, TypedValue::Float));
        registry.register(K::String, K::Double, |v, to| parse_text(v, to, TypedValue::Double));
        registry.register(K::String, K::Boolean, string_to_boolean);
        registry.register(K::String, K::Date, |v, to| string_to_date(v, to).map(TypedValue::Date));
        registry.register(K::String, K::Instant, |v, to| {
            string_to_date(v, to).map(TypedValue::Instant)
        });
        registry.register(K::String, K::Geometry, string_to_geometry);

        for from in [K::Integer, K::Short, K::Long] {
            for to in [K::Integer, K::Short, K::Long, K::Float, K::Double] {
                if from != to {
                    registry.register(from, to, convert_integral);
                }
            }
        }
        registry.register(K::Float, K::Double, |v, to| match v {
            TypedValue::Float(f) => Ok(TypedValue::Double(f64::from(*f))),
            other => Err(mismatch(other, to)),
        });

        registry.register(K::Date, K::Instant, |v, to| match v {
            TypedValue::Date(d) => Ok(TypedValue::Instant(*d)),
            other => Err(mismatch(other, to)),
        });
        registry.register(K::Instant, K::Date, |v, to| match v {
            TypedValue::Instant(d) => Ok(TypedValue::Date(*d)),
            other => Err(mismatch(other, to)),
        });

        for from in [
            K::Integer,
            K::Short,
            K::Long,
            K::Float,
            K::Double,
            K::Boolean,
            K::Date,
            K::Instant,
        ] {
            registry.register(from, K::String, |v, _| Ok(TypedValue::String(v.to_string())));
        }

        registry
    }

    /// Register (or replace) a conversion
    pub fn register(&mut self, from: ValueKind, to: ValueKind, conversion: ConversionFn) {
        self.conversions.insert((from, to), conversion);
    }

    /// Check whether `from` converts to `to`
    pub fn can_convert(&self, from: ValueKind, to: ValueKind) -> bool {
        from == to || self.conversions.contains_key(&(from, to))
    }

    /// Convert a value to the target kind
    pub fn coerce(&self, value: &TypedValue, target: ValueKind) -> CoercionResult<TypedValue> {
        let from = value.kind();
        if from == target {
            return Ok(value.clone());
        }
        let conversion = self
            .conversions
            .get(&(from, target))
            .ok_or(CoercionError::CannotConvert { from, to: target })?;
        conversion(value, target)
    }
}

fn mismatch(value: &TypedValue, to: ValueKind) -> CoercionError {
    CoercionError::CannotConvert {
        from: value.kind(),
        to,
    }
}

fn expect_text(value: &TypedValue, to: ValueKind) -> CoercionResult<&str> {
    value.as_str().ok_or_else(|| mismatch(value, to))
}

fn parse_text<T>(
    value: &TypedValue,
    to: ValueKind,
    wrap: fn(T) -> TypedValue,
) -> CoercionResult<TypedValue>
where
    T: FromStr,
    T::Err: Display,
{
    let text = expect_text(value, to)?;
    text.trim()
        .parse::<T>()
        .map(wrap)
        .map_err(|e| CoercionError::InvalidFormat {
            value: text.to_string(),
            to,
            message: e.to_string(),
        })
}

fn string_to_boolean(value: &TypedValue, to: ValueKind) -> CoercionResult<TypedValue> {
    let text = expect_text(value, to)?;
    match text.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(TypedValue::Boolean(true)),
        "false" => Ok(TypedValue::Boolean(false)),
        _ => Err(CoercionError::InvalidFormat {
            value: text.to_string(),
            to,
            message: "expected 'true' or 'false'".to_string(),
        }),
    }
}

/// RFC 3339 timestamps, or plain dates taken as midnight UTC
fn string_to_date(value: &TypedValue, to: ValueKind) -> CoercionResult<DateTime<Utc>> {
    let text = expect_text(value, to)?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoercionError::InvalidFormat {
            value: text.to_string(),
            to,
            message: "expected an RFC 3339 timestamp or YYYY-MM-DD date".to_string(),
        })
}

fn string_to_geometry(value: &TypedValue, to: ValueKind) -> CoercionResult<TypedValue> {
    let text = expect_text(value, to)?.trim();
    if text.is_empty() {
        return Err(CoercionError::InvalidFormat {
            value: String::new(),
            to,
            message: "empty WKT".to_string(),
        });
    }
    Ok(TypedValue::Geometry(Geometry::Wkt(text.to_string())))
}

fn convert_integral(value: &TypedValue, to: ValueKind) -> CoercionResult<TypedValue> {
    let wide = match value {
        TypedValue::Integer(i) => i64::from(*i),
        TypedValue::Short(i) => i64::from(*i),
        TypedValue::Long(i) => *i,
        other => return Err(mismatch(other, to)),
    };
    let out_of_range = || CoercionError::OutOfRange {
        value: wide.to_string(),
        to,
    };
    match to {
        ValueKind::Integer => i32::try_from(wide)
            .map(TypedValue::Integer)
            .map_err(|_| out_of_range()),
        ValueKind::Short => i16::try_from(wide)
            .map(TypedValue::Short)
            .map_err(|_| out_of_range()),
        ValueKind::Long => Ok(TypedValue::Long(wide)),
        ValueKind::Float => Ok(TypedValue::Float(wide as f32)),
        ValueKind::Double => Ok(TypedValue::Double(wide as f64)),
        _ => Err(mismatch(value, to)),
    }
}
