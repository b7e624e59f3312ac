//! Predicate AST nodes
//!
//! This module defines every boolean-valued filter node: logical
//! combinators, comparisons, spatial and temporal relations.

use crate::Expression;
use serde::{Deserialize, Serialize};

/// All filter predicate types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    // === Logical ===
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),

    // === Trivial ===
    /// Matches everything
    IncludeAll,
    /// Matches nothing
    ExcludeAll,

    // === Identifier ===
    /// Feature identifier lookup
    Id(Vec<String>),

    // === Comparison ===
    Equal(BinaryComparison),
    NotEqual(BinaryComparison),
    GreaterThan(BinaryComparison),
    GreaterThanOrEqual(BinaryComparison),
    LessThan(BinaryComparison),
    LessThanOrEqual(BinaryComparison),
    Between(BetweenPredicate),
    Like(LikePredicate),
    IsNull(Expression),
    IsNil(Expression),

    // === Spatial ===
    Bbox(Operands),
    Beyond(DistanceOperands),
    Contains(Operands),
    Crosses(Operands),
    Disjoint(Operands),
    DWithin(DistanceOperands),
    /// Spatial equality
    Equals(Operands),
    Intersects(Operands),
    Overlaps(Operands),
    Touches(Operands),
    Within(Operands),

    // === Temporal ===
    After(Operands),
    Before(Operands),
    During(Operands),
    Begins(Operands),
    BegunBy(Operands),
    EndedBy(Operands),
    Ends(Operands),
    Meets(Operands),
    MetBy(Operands),
    OverlappedBy(Operands),
    AnyInteracts(Operands),
    TContains(Operands),
    TEquals(Operands),
    TOverlaps(Operands),
}

impl Predicate {
    /// Get the node kind name
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::And(_) => "And",
            Self::Or(_) => "Or",
            Self::Not(_) => "Not",
            Self::IncludeAll => "IncludeAll",
            Self::ExcludeAll => "ExcludeAll",
            Self::Id(_) => "Id",
            Self::Equal(_) => "Equal",
            Self::NotEqual(_) => "NotEqual",
            Self::GreaterThan(_) => "GreaterThan",
            Self::GreaterThanOrEqual(_) => "GreaterThanOrEqual",
            Self::LessThan(_) => "LessThan",
            Self::LessThanOrEqual(_) => "LessThanOrEqual",
            Self::Between(_) => "Between",
            Self::Like(_) => "Like",
            Self::IsNull(_) => "IsNull",
            Self::IsNil(_) => "IsNil",
            Self::Bbox(_) => "BBOX",
            Self::Beyond(_) => "Beyond",
            Self::Contains(_) => "Contains",
            Self::Crosses(_) => "Crosses",
            Self::Disjoint(_) => "Disjoint",
            Self::DWithin(_) => "DWithin",
            Self::Equals(_) => "Equals",
            Self::Intersects(_) => "Intersects",
            Self::Overlaps(_) => "Overlaps",
            Self::Touches(_) => "Touches",
            Self::Within(_) => "Within",
            Self::After(_) => "After",
            Self::Before(_) => "Before",
            Self::During(_) => "During",
            Self::Begins(_) => "Begins",
            Self::BegunBy(_) => "BegunBy",
            Self::EndedBy(_) => "EndedBy",
            Self::Ends(_) => "Ends",
            Self::Meets(_) => "Meets",
            Self::MetBy(_) => "MetBy",
            Self::OverlappedBy(_) => "OverlappedBy",
            Self::AnyInteracts(_) => "AnyInteracts",
            Self::TContains(_) => "TContains",
            Self::TEquals(_) => "TEquals",
            Self::TOverlaps(_) => "TOverlaps",
        }
    }
}

/// Binary comparison operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryComparison {
    pub left: Expression,
    pub right: Expression,
    /// Case sensitivity for string comparisons
    pub match_case: bool,
}

impl BinaryComparison {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self {
            left,
            right,
            match_case: true,
        }
    }

    /// Same comparison with the operands swapped
    pub fn swapped(&self) -> Self {
        Self {
            left: self.right.clone(),
            right: self.left.clone(),
            match_case: self.match_case,
        }
    }
}

/// Range test `lower <= expression <= upper`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenPredicate {
    pub expression: Expression,
    pub lower: Expression,
    pub upper: Expression,
}

/// Pattern match with caller-chosen control characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikePredicate {
    pub expression: Expression,
    pub pattern: String,
    pub wildcard: String,
    pub single_char: String,
    pub escape: String,
    pub match_case: bool,
}

/// Two operands of a spatial or temporal relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    pub left: Expression,
    pub right: Expression,
}

impl Operands {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self { left, right }
    }
}

/// Spatial operands with a distance and its unit of measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceOperands {
    pub left: Expression,
    pub right: Expression,
    pub distance: f64,
    pub unit: String,
}
