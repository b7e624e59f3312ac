//! Filter Translation Engine
//!
//! This module provides the `FilterTranslator` which walks a predicate tree
//! and drives a [`FilterDelegate`], one delegate call per node.

use crate::config::{Clock, FilterTranslatorBuilder, TranslatorConfig};
use crate::context::TranslationContext;
use crate::delegate::FilterDelegate;
use crate::error::{TranslateError, TranslateResult};
use crate::operators::{ComparisonOp, SpatialOp};
use catalog_filter_ast::Predicate;
use catalog_filter_diagnostics::{FilterError, Result};
use catalog_filter_types::CoercionRegistry;
use chrono::Utc;
use std::fmt;
use std::sync::{Arc, LazyLock};

static DEFAULT_TRANSLATOR: LazyLock<FilterTranslator> = LazyLock::new(FilterTranslator::new);

/// Compiles predicate trees into delegate calls
///
/// The translator holds configuration only; all per-call state lives in a
/// [`TranslationContext`], so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct FilterTranslator {
    config: TranslatorConfig,
    clock: Clock,
    coercions: Option<Arc<CoercionRegistry>>,
}

impl Default for FilterTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterTranslator")
            .field("config", &self.config)
            .field("custom_coercions", &self.coercions.is_some())
            .finish_non_exhaustive()
    }
}

impl FilterTranslator {
    /// Create a translator with default configuration and the system clock
    pub fn new() -> Self {
        Self::from_config(TranslatorConfig::default())
    }

    pub fn from_config(config: TranslatorConfig) -> Self {
        Self::from_parts(config, Arc::new(Utc::now), None)
    }

    pub fn builder() -> FilterTranslatorBuilder {
        FilterTranslatorBuilder::new()
    }

    pub(crate) fn from_parts(
        config: TranslatorConfig,
        clock: Clock,
        coercions: Option<Arc<CoercionRegistry>>,
    ) -> Self {
        Self {
            config,
            clock,
            coercions,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Registry used for literal coercion
    pub fn coercions(&self) -> &CoercionRegistry {
        self.coercions
            .as_deref()
            .unwrap_or_else(|| CoercionRegistry::shared())
    }

    /// Translate `filter` into the delegate's query form
    ///
    /// The first error aborts the call; nothing is returned from the
    /// delegate calls made before it.
    pub fn translate<D: FilterDelegate>(
        &self,
        filter: Option<&Predicate>,
        delegate: &D,
    ) -> TranslateResult<D::Output> {
        let Some(filter) = filter else {
            log::debug!("filter translation rejected: no filter supplied");
            return Err(TranslateError::missing_filter());
        };

        let mut ctx = TranslationContext::new(self.config.max_depth, (self.clock)());
        self.visit(filter, delegate, &mut ctx).map_err(|err| {
            log::debug!("filter translation failed with {}: {}", err.code(), err.message());
            TranslateError::from(err)
        })
    }

    /// Translate one predicate node
    pub(crate) fn visit<D: FilterDelegate>(
        &self,
        predicate: &Predicate,
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<D::Output> {
        ctx.enter()?;
        log::trace!("visiting {} at depth {}", predicate.kind_name(), ctx.depth());
        let result = self.dispatch(predicate, delegate, ctx);
        ctx.leave();
        result
    }

    fn dispatch<D: FilterDelegate>(
        &self,
        predicate: &Predicate,
        delegate: &D,
        ctx: &mut TranslationContext,
    ) -> Result<D::Output> {
        match predicate {
            // === Logical ===
            Predicate::And(children) => self.visit_and(children, delegate, ctx),
            Predicate::Or(children) => self.visit_or(children, delegate, ctx),
            Predicate::Not(child) => self.visit_not(child, delegate, ctx),
            Predicate::IncludeAll => delegate.include(),
            Predicate::ExcludeAll => delegate.exclude(),

            // === Comparison ===
            Predicate::Equal(c) => self.visit_comparison(ComparisonOp::Equal, c, delegate, ctx),
            Predicate::NotEqual(c) => {
                self.visit_comparison(ComparisonOp::NotEqual, c, delegate, ctx)
            }
            Predicate::GreaterThan(c) => {
                self.visit_comparison(ComparisonOp::GreaterThan, c, delegate, ctx)
            }
            Predicate::GreaterThanOrEqual(c) => {
                self.visit_comparison(ComparisonOp::GreaterThanOrEqual, c, delegate, ctx)
            }
            Predicate::LessThan(c) => {
                self.visit_comparison(ComparisonOp::LessThan, c, delegate, ctx)
            }
            Predicate::LessThanOrEqual(c) => {
                self.visit_comparison(ComparisonOp::LessThanOrEqual, c, delegate, ctx)
            }
            Predicate::Between(b) => self.visit_between(b, delegate),
            Predicate::Like(l) => self.visit_like(l, delegate),
            Predicate::IsNull(e) => self.visit_is_null(e, delegate),

            // === Spatial ===
            Predicate::Beyond(d) => self.visit_beyond(d, delegate),
            Predicate::DWithin(d) => self.visit_dwithin(d, delegate),
            Predicate::Contains(o) => self.visit_spatial(SpatialOp::Contains, o, delegate),
            Predicate::Crosses(o) => self.visit_spatial(SpatialOp::Crosses, o, delegate),
            Predicate::Disjoint(o) => self.visit_spatial(SpatialOp::Disjoint, o, delegate),
            Predicate::Intersects(o) => self.visit_spatial(SpatialOp::Intersects, o, delegate),
            Predicate::Overlaps(o) => self.visit_spatial(SpatialOp::Overlaps, o, delegate),
            Predicate::Touches(o) => self.visit_spatial(SpatialOp::Touches, o, delegate),
            Predicate::Within(o) => self.visit_spatial(SpatialOp::Within, o, delegate),

            // === Temporal ===
            Predicate::After(o) => self.visit_after(o, delegate),
            Predicate::Before(o) => self.visit_before(o, delegate),
            Predicate::During(o) => self.visit_during(o, delegate, ctx),
            Predicate::Begins(o) => self.visit_begins(o, delegate),

            // === No backend counterpart ===
            Predicate::Id(_)
            | Predicate::IsNil(_)
            | Predicate::Bbox(_)
            | Predicate::Equals(_)
            | Predicate::BegunBy(_)
            | Predicate::EndedBy(_)
            | Predicate::Ends(_)
            | Predicate::Meets(_)
            | Predicate::MetBy(_)
            | Predicate::OverlappedBy(_)
            | Predicate::AnyInteracts(_)
            | Predicate::TContains(_)
            | Predicate::TEquals(_)
            | Predicate::TOverlaps(_) => {
                Err(FilterError::unsupported_predicate(predicate.kind_name()))
            }
        }
    }
}

/// Translate `filter` with the default translator
pub fn translate<D: FilterDelegate>(
    filter: Option<&Predicate>,
    delegate: &D,
) -> TranslateResult<D::Output> {
    DEFAULT_TRANSLATOR.translate(filter, delegate)
}
