//! Spatial relations
//!
//! Implements: Beyond, DWithin, Contains, Crosses, Disjoint, Intersects,
//! Overlaps, Touches, Within.
//! Geometries reach the delegate as WKT and distances in meters.

use crate::delegate::FilterDelegate;
use crate::engine::FilterTranslator;
use catalog_filter_ast::{DistanceOperands, Expression, Operands, TypedValue, ValueKind};
use catalog_filter_diagnostics::{FLT0007, FilterError, Result};
use catalog_filter_types::distance_in_meters;
use std::fmt;

/// Distances below this many meters turn `Beyond` into a nearest-neighbor query
pub const NEAREST_NEIGHBOR_EPSILON: f64 = 1e-6;

/// Topological relations between a property and a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialOp {
    Contains,
    Crosses,
    Disjoint,
    Intersects,
    Overlaps,
    Touches,
    Within,
}

impl SpatialOp {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::Crosses => "Crosses",
            Self::Disjoint => "Disjoint",
            Self::Intersects => "Intersects",
            Self::Overlaps => "Overlaps",
            Self::Touches => "Touches",
            Self::Within => "Within",
        }
    }
}

impl fmt::Display for SpatialOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FilterTranslator {
    /// Resolve a property name and the WKT of the compared geometry
    fn spatial_operands(
        &self,
        operation: &str,
        left: &Expression,
        right: &Expression,
    ) -> Result<(String, String)> {
        let (name, literal) =
            self.property_operand(operation, left, right, Some(ValueKind::Geometry))?;
        match literal {
            TypedValue::Geometry(geometry) => Ok((name, geometry.to_wkt()?)),
            other => Err(FilterError::unsupported(
                FLT0007,
                format!("{operation} does not accept {} literals", other.kind()),
            )),
        }
    }

    pub(crate) fn visit_spatial<D: FilterDelegate>(
        &self,
        op: SpatialOp,
        operands: &Operands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, wkt) = self.spatial_operands(op.name(), &operands.left, &operands.right)?;
        match op {
            SpatialOp::Contains => delegate.contains(&name, &wkt),
            SpatialOp::Crosses => delegate.crosses(&name, &wkt),
            SpatialOp::Disjoint => delegate.disjoint(&name, &wkt),
            SpatialOp::Intersects => delegate.intersects(&name, &wkt),
            SpatialOp::Overlaps => delegate.overlaps(&name, &wkt),
            SpatialOp::Touches => delegate.touches(&name, &wkt),
            SpatialOp::Within => delegate.within(&name, &wkt),
        }
    }

    /// Translate `Beyond`
    ///
    /// A zero distance asks for the nearest neighbors instead.
    pub(crate) fn visit_beyond<D: FilterDelegate>(
        &self,
        operands: &DistanceOperands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, wkt) = self.spatial_operands("Beyond", &operands.left, &operands.right)?;
        let meters = distance_in_meters(operands.distance, &operands.unit)?;
        if meters.abs() < NEAREST_NEIGHBOR_EPSILON {
            log::trace!("Beyond on '{name}' with zero distance becomes a nearest-neighbor query");
            return delegate.nearest_neighbor(&name, &wkt);
        }
        delegate.beyond(&name, &wkt, meters)
    }

    pub(crate) fn visit_dwithin<D: FilterDelegate>(
        &self,
        operands: &DistanceOperands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, wkt) = self.spatial_operands("DWithin", &operands.left, &operands.right)?;
        let meters = distance_in_meters(operands.distance, &operands.unit)?;
        delegate.dwithin(&name, &wkt, meters)
    }
}
