//! Recording delegate
//!
//! Renders every delegate call as `method(args)` and keeps the calls in
//! order, so tests can assert both the composed output and the call log.

use catalog_filter::{FilterDelegate, Result, TypedValue};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;

fn date(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn values(values: &[TypedValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Delegate implementing every operation
#[derive(Default)]
pub struct RecordingDelegate {
    calls: Mutex<Vec<String>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Names of the delegate methods called so far
    pub fn methods(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.split('(').next().unwrap_or_default().to_string())
            .collect()
    }

    fn record(&self, call: String) -> Result<String> {
        self.calls.lock().push(call.clone());
        Ok(call)
    }
}

impl FilterDelegate for RecordingDelegate {
    type Output = String;

    fn and(&self, operands: Vec<String>) -> Result<String> {
        self.record(format!("and({})", operands.join(", ")))
    }

    fn or(&self, operands: Vec<String>) -> Result<String> {
        self.record(format!("or({})", operands.join(", ")))
    }

    fn not(&self, operand: String) -> Result<String> {
        self.record(format!("not({operand})"))
    }

    fn include(&self) -> Result<String> {
        self.record("include()".to_string())
    }

    fn exclude(&self) -> Result<String> {
        self.record("exclude()".to_string())
    }

    fn equal_to_string(&self, property: &str, value: &str, match_case: bool) -> Result<String> {
        self.record(format!("equal_to_string({property}, '{value}', {match_case})"))
    }

    fn equal_to_date(&self, property: &str, value: DateTime<Utc>) -> Result<String> {
        self.record(format!("equal_to_date({property}, {})", date(value)))
    }

    fn equal_to_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("equal_to_date_range({property}, {}, {})", date(start), date(end)))
    }

    fn equal_to_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("equal_to_int({property}, {value})"))
    }

    fn equal_to_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("equal_to_short({property}, {value})"))
    }

    fn equal_to_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("equal_to_long({property}, {value})"))
    }

    fn equal_to_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("equal_to_float({property}, {value:?})"))
    }

    fn equal_to_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("equal_to_double({property}, {value:?})"))
    }

    fn equal_to_bool(&self, property: &str, value: bool) -> Result<String> {
        self.record(format!("equal_to_bool({property}, {value})"))
    }

    fn equal_to_bytes(&self, property: &str, value: &[u8]) -> Result<String> {
        self.record(format!("equal_to_bytes({property}, {value:?})"))
    }

    fn equal_to_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("equal_to_value({property}, {value})"))
    }

    fn equal_to_function(
        &self,
        function: &str,
        arguments: &[TypedValue],
        value: &TypedValue,
    ) -> Result<String> {
        self.record(format!("equal_to_function({function}, [{}], {value})", values(arguments)))
    }

    fn not_equal_to_string(&self, property: &str, value: &str, match_case: bool) -> Result<String> {
        self.record(format!("not_equal_to_string({property}, '{value}', {match_case})"))
    }

    fn not_equal_to_date(&self, property: &str, value: DateTime<Utc>) -> Result<String> {
        self.record(format!("not_equal_to_date({property}, {})", date(value)))
    }

    fn not_equal_to_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("not_equal_to_date_range({property}, {}, {})", date(start), date(end)))
    }

    fn not_equal_to_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("not_equal_to_int({property}, {value})"))
    }

    fn not_equal_to_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("not_equal_to_short({property}, {value})"))
    }

    fn not_equal_to_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("not_equal_to_long({property}, {value})"))
    }

    fn not_equal_to_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("not_equal_to_float({property}, {value:?})"))
    }

    fn not_equal_to_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("not_equal_to_double({property}, {value:?})"))
    }

    fn not_equal_to_bool(&self, property: &str, value: bool) -> Result<String> {
        self.record(format!("not_equal_to_bool({property}, {value})"))
    }

    fn not_equal_to_bytes(&self, property: &str, value: &[u8]) -> Result<String> {
        self.record(format!("not_equal_to_bytes({property}, {value:?})"))
    }

    fn not_equal_to_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("not_equal_to_value({property}, {value})"))
    }

    fn greater_than_string(&self, property: &str, value: &str) -> Result<String> {
        self.record(format!("greater_than_string({property}, '{value}')"))
    }

    fn greater_than_date(&self, property: &str, value: DateTime<Utc>) -> Result<String> {
        self.record(format!("greater_than_date({property}, {})", date(value)))
    }

    fn greater_than_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("greater_than_date_range({property}, {}, {})", date(start), date(end)))
    }

    fn greater_than_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("greater_than_int({property}, {value})"))
    }

    fn greater_than_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("greater_than_short({property}, {value})"))
    }

    fn greater_than_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("greater_than_long({property}, {value})"))
    }

    fn greater_than_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("greater_than_float({property}, {value:?})"))
    }

    fn greater_than_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("greater_than_double({property}, {value:?})"))
    }

    fn greater_than_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("greater_than_value({property}, {value})"))
    }

    fn greater_than_or_equal_to_string(&self, property: &str, value: &str) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_string({property}, '{value}')"))
    }

    fn greater_than_or_equal_to_date(
        &self,
        property: &str,
        value: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_date({property}, {})", date(value)))
    }

    fn greater_than_or_equal_to_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!(
            "greater_than_or_equal_to_date_range({property}, {}, {})",
            date(start), date(end)
        ))
    }

    fn greater_than_or_equal_to_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_int({property}, {value})"))
    }

    fn greater_than_or_equal_to_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_short({property}, {value})"))
    }

    fn greater_than_or_equal_to_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_long({property}, {value})"))
    }

    fn greater_than_or_equal_to_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_float({property}, {value:?})"))
    }

    fn greater_than_or_equal_to_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_double({property}, {value:?})"))
    }

    fn greater_than_or_equal_to_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("greater_than_or_equal_to_value({property}, {value})"))
    }

    fn less_than_string(&self, property: &str, value: &str) -> Result<String> {
        self.record(format!("less_than_string({property}, '{value}')"))
    }

    fn less_than_date(&self, property: &str, value: DateTime<Utc>) -> Result<String> {
        self.record(format!("less_than_date({property}, {})", date(value)))
    }

    fn less_than_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("less_than_date_range({property}, {}, {})", date(start), date(end)))
    }

    fn less_than_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("less_than_int({property}, {value})"))
    }

    fn less_than_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("less_than_short({property}, {value})"))
    }

    fn less_than_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("less_than_long({property}, {value})"))
    }

    fn less_than_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("less_than_float({property}, {value:?})"))
    }

    fn less_than_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("less_than_double({property}, {value:?})"))
    }

    fn less_than_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("less_than_value({property}, {value})"))
    }

    fn less_than_or_equal_to_string(&self, property: &str, value: &str) -> Result<String> {
        self.record(format!("less_than_or_equal_to_string({property}, '{value}')"))
    }

    fn less_than_or_equal_to_date(&self, property: &str, value: DateTime<Utc>) -> Result<String> {
        self.record(format!("less_than_or_equal_to_date({property}, {})", date(value)))
    }

    fn less_than_or_equal_to_date_range(
        &self,
        property: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!(
            "less_than_or_equal_to_date_range({property}, {}, {})",
            date(start), date(end)
        ))
    }

    fn less_than_or_equal_to_int(&self, property: &str, value: i32) -> Result<String> {
        self.record(format!("less_than_or_equal_to_int({property}, {value})"))
    }

    fn less_than_or_equal_to_short(&self, property: &str, value: i16) -> Result<String> {
        self.record(format!("less_than_or_equal_to_short({property}, {value})"))
    }

    fn less_than_or_equal_to_long(&self, property: &str, value: i64) -> Result<String> {
        self.record(format!("less_than_or_equal_to_long({property}, {value})"))
    }

    fn less_than_or_equal_to_float(&self, property: &str, value: f32) -> Result<String> {
        self.record(format!("less_than_or_equal_to_float({property}, {value:?})"))
    }

    fn less_than_or_equal_to_double(&self, property: &str, value: f64) -> Result<String> {
        self.record(format!("less_than_or_equal_to_double({property}, {value:?})"))
    }

    fn less_than_or_equal_to_value(&self, property: &str, value: &TypedValue) -> Result<String> {
        self.record(format!("less_than_or_equal_to_value({property}, {value})"))
    }

    fn between_string(&self, property: &str, lower: &str, upper: &str) -> Result<String> {
        self.record(format!("between_string({property}, '{lower}', '{upper}')"))
    }

    fn between_date(
        &self,
        property: &str,
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> Result<String> {
        self.record(format!("between_date({property}, {}, {})", date(lower), date(upper)))
    }

    fn between_int(&self, property: &str, lower: i32, upper: i32) -> Result<String> {
        self.record(format!("between_int({property}, {lower}, {upper})"))
    }

    fn between_short(&self, property: &str, lower: i16, upper: i16) -> Result<String> {
        self.record(format!("between_short({property}, {lower}, {upper})"))
    }

    fn between_long(&self, property: &str, lower: i64, upper: i64) -> Result<String> {
        self.record(format!("between_long({property}, {lower}, {upper})"))
    }

    fn between_float(&self, property: &str, lower: f32, upper: f32) -> Result<String> {
        self.record(format!("between_float({property}, {lower:?}, {upper:?})"))
    }

    fn between_double(&self, property: &str, lower: f64, upper: f64) -> Result<String> {
        self.record(format!("between_double({property}, {lower:?}, {upper:?})"))
    }

    fn between_value(
        &self,
        property: &str,
        lower: &TypedValue,
        upper: &TypedValue,
    ) -> Result<String> {
        self.record(format!("between_value({property}, {lower}, {upper})"))
    }

    fn is_null(&self, property: &str) -> Result<String> {
        self.record(format!("is_null({property})"))
    }

    fn like(&self, property: &str, pattern: &str, match_case: bool) -> Result<String> {
        self.record(format!("like({property}, '{pattern}', {match_case})"))
    }

    fn fuzzy_like(&self, property: &str, pattern: &str) -> Result<String> {
        self.record(format!("fuzzy_like({property}, '{pattern}')"))
    }

    fn xpath_like(&self, xpath: &str, pattern: &str, match_case: bool) -> Result<String> {
        self.record(format!("xpath_like({xpath}, '{pattern}', {match_case})"))
    }

    fn xpath_exists(&self, xpath: &str) -> Result<String> {
        self.record(format!("xpath_exists({xpath})"))
    }

    fn xpath_fuzzy_like(&self, xpath: &str, pattern: &str) -> Result<String> {
        self.record(format!("xpath_fuzzy_like({xpath}, '{pattern}')"))
    }

    fn beyond(&self, property: &str, wkt: &str, meters: f64) -> Result<String> {
        self.record(format!("beyond({property}, '{wkt}', {meters:?})"))
    }

    fn nearest_neighbor(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("nearest_neighbor({property}, '{wkt}')"))
    }

    fn dwithin(&self, property: &str, wkt: &str, meters: f64) -> Result<String> {
        self.record(format!("dwithin({property}, '{wkt}', {meters:?})"))
    }

    fn contains(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("contains({property}, '{wkt}')"))
    }

    fn crosses(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("crosses({property}, '{wkt}')"))
    }

    fn disjoint(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("disjoint({property}, '{wkt}')"))
    }

    fn intersects(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("intersects({property}, '{wkt}')"))
    }

    fn overlaps(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("overlaps({property}, '{wkt}')"))
    }

    fn touches(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("touches({property}, '{wkt}')"))
    }

    fn within(&self, property: &str, wkt: &str) -> Result<String> {
        self.record(format!("within({property}, '{wkt}')"))
    }

    fn after(&self, property: &str, at: DateTime<Utc>) -> Result<String> {
        self.record(format!("after({property}, {})", date(at)))
    }

    fn before(&self, property: &str, at: DateTime<Utc>) -> Result<String> {
        self.record(format!("before({property}, {})", date(at)))
    }

    fn during(&self, property: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<String> {
        self.record(format!("during({property}, {}, {})", date(start), date(end)))
    }

    fn relative(&self, property: &str, duration_millis: i64) -> Result<String> {
        self.record(format!("relative({property}, {duration_millis})"))
    }

    fn begins(&self, property: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<String> {
        self.record(format!("begins({property}, {}, {})", date(start), date(end)))
    }
}
