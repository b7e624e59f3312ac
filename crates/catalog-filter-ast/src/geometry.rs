//! Geometry literals and their Well-Known-Text rendering

use catalog_filter_diagnostics::{FLT0006, FilterError, Result};
use serde::{Deserialize, Serialize};

/// A 2D coordinate (x = longitude/easting, y = latitude/northing)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry carried by spatial literals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    /// Exterior ring followed by interior rings
    Polygon(Vec<Vec<Coordinate>>),
    MultiPoint(Vec<Coordinate>),
    /// Axis-aligned bounding box
    Envelope {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    /// Pre-serialized Well-Known-Text
    Wkt(String),
    /// GML document (carried, not translatable)
    Gml(String),
    /// Well-Known-Binary (carried, not translatable)
    Wkb(Vec<u8>),
}

impl Geometry {
    /// Create a point
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Coordinate::new(x, y))
    }

    /// Create an envelope
    pub fn envelope(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::Envelope {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Get the geometry type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::Envelope { .. } => "Envelope",
            Self::Wkt(_) => "WKT",
            Self::Gml(_) => "GML",
            Self::Wkb(_) => "WKB",
        }
    }

    /// Serialize to Well-Known-Text
    ///
    /// Envelopes render as a closed polygon. GML and WKB payloads and
    /// non-finite coordinates are rejected.
    pub fn to_wkt(&self) -> Result<String> {
        let mut out = String::new();
        match self {
            Self::Point(c) => {
                out.push_str("POINT ");
                write_sequence(&mut out, std::slice::from_ref(c))?;
            }
            Self::LineString(coords) => {
                out.push_str("LINESTRING ");
                write_sequence(&mut out, coords)?;
            }
            Self::Polygon(rings) => {
                out.push_str("POLYGON ");
                write_rings(&mut out, rings)?;
            }
            Self::MultiPoint(coords) => {
                out.push_str("MULTIPOINT ");
                if coords.is_empty() {
                    out.push_str("EMPTY");
                } else {
                    let points: Vec<Vec<Coordinate>> = coords.iter().map(|c| vec![*c]).collect();
                    write_rings(&mut out, &points)?;
                }
            }
            Self::Envelope {
                min_x,
                min_y,
                max_x,
                max_y,
            } => {
                let ring = vec![
                    Coordinate::new(*min_x, *min_y),
                    Coordinate::new(*min_x, *max_y),
                    Coordinate::new(*max_x, *max_y),
                    Coordinate::new(*max_x, *min_y),
                    Coordinate::new(*min_x, *min_y),
                ];
                out.push_str("POLYGON ");
                write_rings(&mut out, &[ring])?;
            }
            Self::Wkt(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(FilterError::unsupported(FLT0006, "empty WKT geometry"));
                }
                out.push_str(text);
            }
            Self::Gml(_) | Self::Wkb(_) => {
                return Err(FilterError::unsupported(
                    FLT0006,
                    format!("{} geometries cannot be converted to WKT", self.type_name()),
                ));
            }
        }
        Ok(out)
    }
}

fn write_sequence(out: &mut String, coords: &[Coordinate]) -> Result<()> {
    if coords.is_empty() {
        out.push_str("EMPTY");
        return Ok(());
    }
    out.push('(');
    for (i, c) in coords.iter().enumerate() {
        if !c.x.is_finite() || !c.y.is_finite() {
            return Err(FilterError::unsupported(
                FLT0006,
                format!("coordinate ({} {}) is not finite", c.x, c.y),
            ));
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{} {}", c.x, c.y));
    }
    out.push(')');
    Ok(())
}

fn write_rings(out: &mut String, rings: &[Vec<Coordinate>]) -> Result<()> {
    if rings.is_empty() {
        out.push_str("EMPTY");
        return Ok(());
    }
    out.push('(');
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_sequence(out, ring)?;
    }
    out.push(')');
    Ok(())
}
