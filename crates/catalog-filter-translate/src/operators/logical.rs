//! Logical combinators
//!
//! Implements: And, Or, Not, IncludeAll, ExcludeAll

use crate::context::TranslationContext;
use crate::delegate::FilterDelegate;
use crate::engine::FilterTranslator;
use catalog_filter_ast::Predicate;
use catalog_filter_diagnostics::{FLT0009, FilterError, Result};

fn no_operands(kind: &str) -> FilterError {
    FilterError::unsupported(FLT0009, format!("{kind} has no valid operands"))
}

impl FilterTranslator {
    fn visit_children<D: FilterDelegate>(
        &self,
        children: &[Predicate],
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<Vec<D::Output>> {
        children
            .iter()
            .map(|child| self.visit(child, delegate, ctx))
            .collect()
    }

    /// Translate a conjunction
    ///
    /// A single operand is returned as is, without a delegate `and`.
    pub(crate) fn visit_and<D: FilterDelegate>(
        &self,
        children: &[Predicate],
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<D::Output> {
        let mut results = self.visit_children(children, delegate, ctx)?;
        if results.len() > 1 {
            return delegate.and(results);
        }
        results.pop().ok_or_else(|| no_operands("And"))
    }

    /// Translate a disjunction
    pub(crate) fn visit_or<D: FilterDelegate>(
        &self,
        children: &[Predicate],
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<D::Output> {
        let results = self.visit_children(children, delegate, ctx)?;
        if results.is_empty() {
            return Err(no_operands("Or"));
        }
        delegate.or(results)
    }

    pub(crate) fn visit_not<D: FilterDelegate>(
        &self,
        child: &Predicate,
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<D::Output> {
        let result = self.visit(child, delegate, ctx)?;
        delegate.not(result)
    }
}
