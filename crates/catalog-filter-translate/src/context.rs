//! Per-call translation state

use catalog_filter_diagnostics::{FLT0106, FilterError, Result};
use chrono::{DateTime, Utc};

/// State for a single `translate` call
///
/// Created fresh for every call and dropped when it returns, so a
/// translator can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct TranslationContext {
    depth: usize,
    max_depth: usize,
    now: DateTime<Utc>,
}

impl TranslationContext {
    pub fn new(max_depth: usize, now: DateTime<Utc>) -> Self {
        Self {
            depth: 0,
            max_depth,
            now,
        }
    }

    /// The instant relative times are measured from (fixed for the call)
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Descend one predicate level
    pub fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(FilterError::invalid_argument(
                FLT0106,
                format!("filter nesting exceeds the maximum depth of {}", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
