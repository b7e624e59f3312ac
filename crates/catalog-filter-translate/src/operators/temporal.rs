//! Temporal relations
//!
//! Implements: After, Before, During, Begins.
//! The remaining temporal relations have no delegate counterpart.

use crate::context::TranslationContext;
use crate::delegate::FilterDelegate;
use crate::engine::FilterTranslator;
use catalog_filter_ast::{Operands, TypedValue};
use catalog_filter_diagnostics::{FLT0007, FilterError, Result};
use catalog_filter_types::parse_relative_token;

fn unsupported_literal(operation: &str, literal: &TypedValue) -> FilterError {
    FilterError::unsupported(
        FLT0007,
        format!("{operation} does not accept {} literals", literal.kind()),
    )
}

impl FilterTranslator {
    pub(crate) fn visit_after<D: FilterDelegate>(
        &self,
        operands: &Operands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, literal) =
            self.property_operand("After", &operands.left, &operands.right, None)?;
        if let Some(date) = literal.as_date() {
            return delegate.after(&name, date);
        }
        match literal {
            TypedValue::DateRange { end, .. } => delegate.after(&name, end),
            other => Err(unsupported_literal("After", &other)),
        }
    }

    pub(crate) fn visit_before<D: FilterDelegate>(
        &self,
        operands: &Operands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, literal) =
            self.property_operand("Before", &operands.left, &operands.right, None)?;
        if let Some(date) = literal.as_date() {
            return delegate.before(&name, date);
        }
        match literal {
            TypedValue::DateRange { start, .. } => delegate.before(&name, start),
            other => Err(unsupported_literal("Before", &other)),
        }
    }

    /// Translate `During`
    ///
    /// Besides periods, accepts a duration literal or a `RELATIVE(P...)`
    /// string, both meaning "within this span before now".
    pub(crate) fn visit_during<D: FilterDelegate>(
        &self,
        operands: &Operands,
        delegate: &D,
        ctx: &TranslationContext,
    ) -> Result<D::Output> {
        let (name, literal) =
            self.property_operand("During", &operands.left, &operands.right, None)?;
        match &literal {
            TypedValue::DateRange { start, end } => delegate.during(&name, *start, *end),
            TypedValue::Duration(millis) => delegate.relative(&name, *millis),
            TypedValue::String(text) => match parse_relative_token(text)? {
                Some(duration) => delegate.relative(&name, duration.millis_before(ctx.now())?),
                None => Err(unsupported_literal("During", &literal)),
            },
            other => Err(unsupported_literal("During", other)),
        }
    }

    pub(crate) fn visit_begins<D: FilterDelegate>(
        &self,
        operands: &Operands,
        delegate: &D,
    ) -> Result<D::Output> {
        let (name, literal) =
            self.property_operand("Begins", &operands.left, &operands.right, None)?;
        match literal {
            TypedValue::DateRange { start, end } => delegate.begins(&name, start, end),
            other => Err(unsupported_literal("Begins", &other)),
        }
    }
}
