//! Expression visiting and operand extraction
//!
//! Binary predicates resolve their operands into one of two shapes: a
//! property paired with a literal, or a function call paired with a literal.
//! Either operand may come first.

use crate::engine::FilterTranslator;
use catalog_filter_ast::{Expression, FunctionCall, TypedValue, ValueKind};
use catalog_filter_diagnostics::{FLT0002, FLT0003, FLT0101, FLT0102, FLT0103, FilterError, Result};

/// Resolved operands of a binary predicate
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
    Property {
        name: String,
        literal: TypedValue,
    },
    Function {
        name: String,
        args: Vec<TypedValue>,
        literal: TypedValue,
    },
}

fn unsupported_combination() -> FilterError {
    FilterError::unsupported(
        FLT0003,
        "only PropertyRef/Literal or Function/Literal combinations are supported",
    )
}

/// Reject expression kinds no backend can express
fn reject_unsupported(expr: &Expression) -> Result<()> {
    match expr {
        Expression::Add(_)
        | Expression::Subtract(_)
        | Expression::Multiply(_)
        | Expression::Divide(_)
        | Expression::Nil => Err(FilterError::unsupported_expression(expr.kind_name())),
        Expression::PropertyRef(_) | Expression::Literal(_) | Expression::Function(_) => Ok(()),
    }
}

impl FilterTranslator {
    /// Resolve a property reference to its name
    pub(crate) fn visit_property(&self, expr: &Expression) -> Result<String> {
        reject_unsupported(expr)?;
        match expr {
            Expression::PropertyRef(name) if name.is_empty() => Err(FilterError::invalid_argument(
                FLT0102,
                "property name must not be empty",
            )),
            Expression::PropertyRef(name) => Ok(name.clone()),
            _ => Err(unsupported_combination()),
        }
    }

    /// Resolve a literal, coercing it to `target` when given
    ///
    /// Instants are surfaced as dates.
    pub(crate) fn visit_literal(
        &self,
        expr: &Expression,
        target: Option<ValueKind>,
    ) -> Result<TypedValue> {
        reject_unsupported(expr)?;
        let value = match expr {
            Expression::Literal(Some(value)) => value,
            Expression::Literal(None) => {
                return Err(FilterError::invalid_argument(FLT0101, "literal value is missing"));
            }
            _ => return Err(unsupported_combination()),
        };

        let value = match target {
            Some(kind) => self.coercions().coerce(value, kind)?,
            None => value.clone(),
        };

        Ok(match value {
            TypedValue::Instant(instant) => TypedValue::Date(instant),
            other => other,
        })
    }

    /// Resolve function arguments in declaration order
    pub(crate) fn visit_function(&self, call: &FunctionCall) -> Result<Vec<TypedValue>> {
        if call.args.len() != call.arity() {
            return Err(FilterError::invalid_argument(
                FLT0103,
                format!(
                    "function '{}' expects {} arguments, got {}",
                    call.name,
                    call.arity(),
                    call.args.len()
                ),
            ));
        }

        call.args
            .iter()
            .zip(&call.parameters)
            .map(|(arg, kind)| match arg {
                Expression::Literal(_) => self.visit_literal(arg, *kind),
                Expression::PropertyRef(_) => self.visit_property(arg).map(TypedValue::String),
                Expression::Function(nested) => Err(FilterError::unsupported(
                    FLT0002,
                    format!(
                        "nested function '{}' in arguments of '{}' is not supported",
                        nested.name, call.name
                    ),
                )),
                other => Err(FilterError::unsupported_expression(other.kind_name())),
            })
            .collect()
    }

    /// Resolve the operands of a binary predicate
    ///
    /// The literal is coerced to `target`, or to the function's return kind
    /// when the other operand is a function.
    pub(crate) fn extract_operand(
        &self,
        left: &Expression,
        right: &Expression,
        target: Option<ValueKind>,
    ) -> Result<Operand> {
        reject_unsupported(left)?;
        reject_unsupported(right)?;

        match (left, right) {
            (Expression::PropertyRef(_), Expression::Literal(_)) => Ok(Operand::Property {
                name: self.visit_property(left)?,
                literal: self.visit_literal(right, target)?,
            }),
            (Expression::Literal(_), Expression::PropertyRef(_)) => Ok(Operand::Property {
                name: self.visit_property(right)?,
                literal: self.visit_literal(left, target)?,
            }),
            (Expression::Function(call), literal @ Expression::Literal(_))
            | (literal @ Expression::Literal(_), Expression::Function(call)) => {
                let args = self.visit_function(call)?;
                Ok(Operand::Function {
                    name: call.name.clone(),
                    args,
                    literal: self.visit_literal(literal, call.return_type.or(target))?,
                })
            }
            _ => Err(unsupported_combination()),
        }
    }

    /// Resolve operands that must be a property paired with a literal
    pub(crate) fn property_operand(
        &self,
        operation: &str,
        left: &Expression,
        right: &Expression,
        target: Option<ValueKind>,
    ) -> Result<(String, TypedValue)> {
        match self.extract_operand(left, right, target)? {
            Operand::Property { name, literal } => Ok((name, literal)),
            Operand::Function { name, .. } => Err(FilterError::unsupported(
                FLT0003,
                format!("{operation} does not accept function operand '{name}'"),
            )),
        }
    }
}
