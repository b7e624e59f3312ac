//! Catalog filter abstract syntax tree
//!
//! This crate defines the backend-neutral, OGC-style filter grammar:
//! predicates (logical, comparison, spatial, temporal), value expressions,
//! typed literals and geometries.

pub mod build;
mod expression;
mod geometry;
mod predicate;
mod value;

pub use expression::*;
pub use geometry::*;
pub use predicate::*;
pub use value::*;
