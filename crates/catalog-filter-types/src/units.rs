//! Distance units for proximity relations

use catalog_filter_diagnostics::{FLT0005, FLT0108, FilterError};
use std::fmt;
use std::str::FromStr;

/// Units accepted by `Beyond` and `DWithin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Foot,
    StatuteMile,
    NauticalMile,
}

impl DistanceUnit {
    /// Meters in one unit
    pub const fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 1_000.0,
            Self::Foot => 0.3048,
            Self::StatuteMile => 1_609.344,
            Self::NauticalMile => 1_852.0,
        }
    }

    /// Convert a distance in this unit to meters
    pub fn to_meters(&self, distance: f64) -> f64 {
        distance * self.meters_per_unit()
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Meter => "meters",
            Self::Kilometer => "kilometers",
            Self::Foot => "feet",
            Self::StatuteMile => "statute miles",
            Self::NauticalMile => "nautical miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceUnit {
    type Err = FilterError;

    /// Case-insensitive; accepts singular, plural, British spellings and
    /// common abbreviations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        let unit = match normalized.as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Self::Meter,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Self::Kilometer,
            "ft" | "foot" | "feet" => Self::Foot,
            "mi" | "mile" | "miles" | "statute mile" | "statute miles" => Self::StatuteMile,
            "nmi" | "nautical mile" | "nautical miles" => Self::NauticalMile,
            _ => {
                return Err(FilterError::unsupported(
                    FLT0005,
                    format!("unknown distance unit '{s}'"),
                ));
            }
        };
        Ok(unit)
    }
}

/// Normalize `distance` given in `unit` to meters
///
/// NaN and infinite distances are rejected, as are finite distances that
/// overflow once converted.
pub fn distance_in_meters(distance: f64, unit: &str) -> Result<f64, FilterError> {
    let unit = unit.parse::<DistanceUnit>()?;
    let meters = unit.to_meters(distance);
    if !meters.is_finite() {
        return Err(FilterError::invalid_argument(
            FLT0108,
            format!("distance {distance} {unit} is not a finite number of meters"),
        ));
    }
    Ok(meters)
}
