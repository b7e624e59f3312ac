//! Relative durations
//!
//! A relative duration expresses "look back N units from now". The text form
//! is an ISO-8601 duration whose components may carry decimals, e.g.
//! `P1Y6M`, `P0.5D` or `PT1.5H`, optionally wrapped as `RELATIVE(P...)` in
//! filter literals.
//!
//! Each component keeps its integer part; the fractional parts of all
//! components are converted to seconds using average calendar lengths and
//! added to the seconds field. Numbers are parsed as exact decimals so that
//! fractions like `0.1` do not drift.

use catalog_filter_diagnostics::{FLT0105, FLT0107, FilterError};
use chrono::{DateTime, Months, TimeDelta, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Average seconds per year (365.2425 days)
pub const SECONDS_PER_YEAR: i64 = 31_556_952;
/// Average seconds per month (30.44 days)
pub const SECONDS_PER_MONTH: i64 = 2_630_016;
pub const SECONDS_PER_WEEK: i64 = 604_800;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let n = r"([0-9]+(?:[.,][0-9]+)?)";
    Regex::new(&format!(
        "^P(?:{n}Y)?(?:{n}M)?(?:{n}W)?(?:{n}D)?(?:(T)(?:{n}H)?(?:{n}M)?(?:{n}S)?)?$"
    ))
    .expect("duration pattern is valid")
});

static RELATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*RELATIVE\((.*)\)\s*$").expect("relative pattern is valid")
});

/// Relative duration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Text does not follow the duration grammar
    #[error("Invalid duration '{input}': expected P[nY][nM][nW][nD][T[nH][nM][nS]]")]
    InvalidFormat { input: String },

    /// Grammar matched but no component was given
    #[error("Invalid duration '{input}': at least one component is required")]
    Empty { input: String },

    /// Component value too large
    #[error("Duration component '{value}' is out of range")]
    OutOfRange { value: String },

    /// Applying the duration leaves the representable date range
    #[error("Subtracting {duration} from {instant} is out of range")]
    Overflow { duration: String, instant: String },
}

impl From<DurationError> for FilterError {
    fn from(err: DurationError) -> Self {
        match err {
            DurationError::Overflow { .. } => FilterError::invalid_argument(FLT0107, err.to_string()),
            _ => FilterError::invalid_argument(FLT0105, err.to_string()),
        }
    }
}

/// Normalized relative duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RelativeDuration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RelativeDuration {
    /// Parse an ISO-8601 duration with optional decimal components
    pub fn parse(input: &str) -> Result<Self, DurationError> {
        let caps = DURATION_PATTERN
            .captures(input)
            .ok_or_else(|| DurationError::InvalidFormat {
                input: input.to_string(),
            })?;

        // Groups: 1=Y 2=M 3=W 4=D 5=T 6=H 7=M 8=S
        let mut values = [Decimal::ZERO; 7];
        let mut any = false;
        for (slot, group) in [1usize, 2, 3, 4, 6, 7, 8].into_iter().enumerate() {
            if let Some(m) = caps.get(group) {
                values[slot] = parse_component(m.as_str())?;
                any = true;
            }
        }

        let has_time_marker = caps.get(5).is_some();
        let has_time_component = [6, 7, 8].iter().any(|g| caps.get(*g).is_some());
        if has_time_marker && !has_time_component {
            return Err(DurationError::InvalidFormat {
                input: input.to_string(),
            });
        }
        if !any {
            return Err(DurationError::Empty {
                input: input.to_string(),
            });
        }

        Self::from_components(values)
    }

    /// Build from decimal (years, months, weeks, days, hours, minutes, seconds)
    pub fn from_components(values: [Decimal; 7]) -> Result<Self, DurationError> {
        const UNIT_SECONDS: [i64; 7] = [
            SECONDS_PER_YEAR,
            SECONDS_PER_MONTH,
            SECONDS_PER_WEEK,
            SECONDS_PER_DAY,
            SECONDS_PER_HOUR,
            SECONDS_PER_MINUTE,
            1,
        ];

        let mut whole = [0i64; 7];
        let mut fractional_seconds = Decimal::ZERO;
        for (i, value) in values.iter().enumerate() {
            whole[i] = to_i64(value.trunc(), value)?;
            fractional_seconds += value.fract() * Decimal::from(UNIT_SECONDS[i]);
        }

        let extra = to_i64(fractional_seconds.trunc(), &fractional_seconds)?;
        let seconds = whole[6]
            .checked_add(extra)
            .ok_or_else(|| DurationError::OutOfRange {
                value: values[6].to_string(),
            })?;

        Ok(Self {
            years: whole[0],
            months: whole[1],
            weeks: whole[2],
            days: whole[3],
            hours: whole[4],
            minutes: whole[5],
            seconds,
        })
    }

    /// Check whether every field is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// The instant this duration before `instant`
    ///
    /// Years and months move by calendar months (clamping to the end of
    /// shorter months); the remaining fields are fixed spans.
    pub fn subtract_from(&self, instant: DateTime<Utc>) -> Result<DateTime<Utc>, DurationError> {
        let overflow = || DurationError::Overflow {
            duration: self.to_string(),
            instant: instant.to_rfc3339(),
        };

        let months = self
            .years
            .checked_mul(12)
            .and_then(|m| m.checked_add(self.months))
            .and_then(|m| u32::try_from(m).ok())
            .ok_or_else(overflow)?;
        let shifted = instant
            .checked_sub_months(Months::new(months))
            .ok_or_else(overflow)?;

        let span = self.fixed_span().ok_or_else(overflow)?;
        shifted.checked_sub_signed(span).ok_or_else(overflow)
    }

    /// Length in milliseconds of the window ending at `instant`
    pub fn millis_before(&self, instant: DateTime<Utc>) -> Result<i64, DurationError> {
        let start = self.subtract_from(instant)?;
        Ok((instant - start).num_milliseconds())
    }

    fn fixed_span(&self) -> Option<TimeDelta> {
        TimeDelta::try_weeks(self.weeks)?
            .checked_add(&TimeDelta::try_days(self.days)?)?
            .checked_add(&TimeDelta::try_hours(self.hours)?)?
            .checked_add(&TimeDelta::try_minutes(self.minutes)?)?
            .checked_add(&TimeDelta::try_seconds(self.seconds)?)
    }
}

impl FromStr for RelativeDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RelativeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P")?;
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        if self.hours != 0 || self.minutes != 0 || self.seconds != 0 {
            write!(f, "T")?;
            for (value, unit) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if value != 0 {
                    write!(f, "{value}{unit}")?;
                }
            }
        } else if self.is_zero() {
            write!(f, "T0S")?;
        }
        Ok(())
    }
}

/// Extract the duration from a `RELATIVE(P...)` token
///
/// Returns `Ok(None)` when the text is not a relative token at all, and an
/// error when it is one but the wrapped duration is malformed.
pub fn parse_relative_token(text: &str) -> Result<Option<RelativeDuration>, DurationError> {
    match RELATIVE_PATTERN.captures(text) {
        Some(caps) => {
            let inner = caps.get(1).map_or("", |m| m.as_str()).trim();
            RelativeDuration::parse(inner).map(Some)
        }
        None => Ok(None),
    }
}

fn parse_component(text: &str) -> Result<Decimal, DurationError> {
    Decimal::from_str(&text.replace(',', ".")).map_err(|_| DurationError::OutOfRange {
        value: text.to_string(),
    })
}

fn to_i64(value: Decimal, original: &Decimal) -> Result<i64, DurationError> {
    value.to_i64().ok_or_else(|| DurationError::OutOfRange {
        value: original.to_string(),
    })
}
