//! Expression AST nodes
//!
//! Expressions produce the values that predicates compare: property
//! references, literals and function calls. Arithmetic nodes exist so that
//! trees from richer query languages can be represented, but no backend
//! accepts them.

use crate::{TypedValue, ValueKind};
use serde::{Deserialize, Serialize};

/// All filter expression types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Reference to a named attribute
    PropertyRef(String),
    /// Literal value; `None` is a null literal
    Literal(Option<TypedValue>),
    /// Function invocation
    Function(FunctionCall),
    Add(ArithmeticExpr),
    Subtract(ArithmeticExpr),
    Multiply(ArithmeticExpr),
    Divide(ArithmeticExpr),
    /// The nil placeholder expression
    Nil,
}

impl Expression {
    /// Get the node kind name
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::PropertyRef(_) => "PropertyRef",
            Self::Literal(_) => "Literal",
            Self::Function(_) => "Function",
            Self::Add(_) => "Add",
            Self::Subtract(_) => "Subtract",
            Self::Multiply(_) => "Multiply",
            Self::Divide(_) => "Divide",
            Self::Nil => "Nil",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Binary arithmetic operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticExpr {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Function call with its declared signature
///
/// `parameters` holds one entry per declared parameter; `None` accepts any
/// value kind without conversion. The same applies to `return_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expression>,
    pub parameters: Vec<Option<ValueKind>>,
    pub return_type: Option<ValueKind>,
}

impl FunctionCall {
    /// Create a call whose declared arity matches the given arguments
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        let parameters = vec![None; args.len()];
        Self {
            name: name.into(),
            args,
            parameters,
            return_type: None,
        }
    }

    /// Declare the parameter kinds
    pub fn with_parameters(mut self, parameters: Vec<Option<ValueKind>>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Declare the return kind
    pub fn with_return_type(mut self, return_type: ValueKind) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Declared number of arguments
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
