//! Translator configuration

use crate::FilterTranslator;
use catalog_filter_types::CoercionRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default maximum predicate nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default name of the fuzzy-match wrapper function
pub const DEFAULT_FUZZY_FUNCTION: &str = "fuzzy";

/// Source of "now" for relative-time expansion
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Serializable translator settings
///
/// Hosts typically deserialize this from their own configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Maximum predicate nesting depth
    pub max_depth: usize,
    /// Function names that mark a like expression as fuzzy (case-insensitive)
    pub fuzzy_functions: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fuzzy_functions: vec![DEFAULT_FUZZY_FUNCTION.to_string()],
        }
    }
}

impl TranslatorConfig {
    /// Check whether `name` is a configured fuzzy function
    pub fn is_fuzzy_function(&self, name: &str) -> bool {
        self.fuzzy_functions
            .iter()
            .any(|f| f.eq_ignore_ascii_case(name))
    }
}

/// Builder for [`FilterTranslator`]
#[derive(Default)]
pub struct FilterTranslatorBuilder {
    config: TranslatorConfig,
    clock: Option<Clock>,
    coercions: Option<Arc<CoercionRegistry>>,
}

impl FilterTranslatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Add a fuzzy function name
    pub fn fuzzy_function(mut self, name: impl Into<String>) -> Self {
        self.config.fuzzy_functions.push(name.into());
        self
    }

    /// Override the clock used for relative-time expansion
    pub fn clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Pin "now" to a fixed instant
    pub fn fixed_now(self, now: DateTime<Utc>) -> Self {
        self.clock(move || now)
    }

    /// Replace the literal coercion registry
    pub fn coercions(mut self, registry: CoercionRegistry) -> Self {
        self.coercions = Some(Arc::new(registry));
        self
    }

    pub fn build(self) -> FilterTranslator {
        FilterTranslator::from_parts(
            self.config,
            self.clock.unwrap_or_else(|| Arc::new(Utc::now)),
            self.coercions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.is_fuzzy_function("FUZZY"));
        assert!(!config.is_fuzzy_function("strToUpper"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TranslatorConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.fuzzy_functions, vec!["fuzzy".to_string()]);
    }
}
