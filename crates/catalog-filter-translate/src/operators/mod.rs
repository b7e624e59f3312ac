//! Predicate translation by category
//!
//! Each module adds the `visit_*` methods for one group of predicates:
//! - Logical combinators (And, Or, Not, IncludeAll, ExcludeAll)
//! - Comparisons (Equal through LessThanOrEqual, Between, IsNull)
//! - Pattern matching (Like)
//! - Spatial relations (Beyond, DWithin, Contains, ...)
//! - Temporal relations (After, Before, During, Begins)
//!
//! Operand extraction shared by all of them lives in `expression`.

pub mod comparison;
pub(crate) mod expression;
pub mod like;
pub(crate) mod logical;
pub mod spatial;
pub(crate) mod temporal;

pub use comparison::{ComparisonOp, canonicalize};
pub use like::LikeControls;
pub use spatial::{NEAREST_NEIGHBOR_EPSILON, SpatialOp};
