//! Literal values carried by filter expressions

use crate::Geometry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a [`TypedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Date,
    Instant,
    DateRange,
    Integer,
    Short,
    Long,
    Float,
    Double,
    Boolean,
    Bytes,
    Geometry,
    Duration,
}

impl ValueKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Date => "Date",
            Self::Instant => "Instant",
            Self::DateRange => "DateRange",
            Self::Integer => "Integer",
            Self::Short => "Short",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Bytes => "Bytes",
            Self::Geometry => "Geometry",
            Self::Duration => "Duration",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal value in a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    /// Text
    String(String),
    /// Absolute point in time
    Date(DateTime<Utc>),
    /// Temporal instant (surfaced to backends as a date)
    Instant(DateTime<Utc>),
    /// Period between two instants
    DateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// 32-bit signed integer
    Integer(i32),
    /// 16-bit signed integer
    Short(i16),
    /// 64-bit signed integer
    Long(i64),
    /// Single precision float
    Float(f32),
    /// Double precision float
    Double(f64),
    /// Boolean
    Boolean(bool),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Geometry
    Geometry(Geometry),
    /// Period duration in milliseconds
    Duration(i64),
}

impl TypedValue {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Instant(_) => ValueKind::Instant,
            Self::DateRange { .. } => ValueKind::DateRange,
            Self::Integer(_) => ValueKind::Integer,
            Self::Short(_) => ValueKind::Short,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Geometry(_) => ValueKind::Geometry,
            Self::Duration(_) => ValueKind::Duration,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an absolute point in time (Date or Instant)
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) | Self::Instant(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Date(d) | Self::Instant(d) => f.write_str(&d.to_rfc3339()),
            Self::DateRange { start, end } => {
                write!(f, "{}/{}", start.to_rfc3339(), end.to_rfc3339())
            }
            Self::Integer(i) => write!(f, "{i}"),
            Self::Short(i) => write!(f, "{i}"),
            Self::Long(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Self::Geometry(g) => write!(f, "{g:?}"),
            Self::Duration(ms) => write!(f, "{ms}ms"),
        }
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for TypedValue {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i16> for TypedValue {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i64> for TypedValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for TypedValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for TypedValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Vec<u8>> for TypedValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<DateTime<Utc>> for TypedValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl From<Geometry> for TypedValue {
    fn from(v: Geometry) -> Self {
        Self::Geometry(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_value_kinds() {
        assert_eq!(TypedValue::from(5).kind(), ValueKind::Integer);
        assert_eq!(TypedValue::from(5i16).kind(), ValueKind::Short);
        assert_eq!(TypedValue::from("x").kind(), ValueKind::String);
    }

    #[test]
    fn test_instant_reads_as_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(TypedValue::Instant(at).as_date(), Some(at));
        assert_eq!(TypedValue::Date(at).as_date(), Some(at));
        assert_eq!(TypedValue::from(1).as_date(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&TypedValue::Integer(7)).unwrap();
        assert_eq!(json, r#"{"type":"Integer","value":7}"#);
        let back: TypedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TypedValue::Integer(7));
    }
}
