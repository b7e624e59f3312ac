//! Pattern matching
//!
//! Callers choose their own like control characters. Patterns are rewritten
//! into the canonical markers below before they reach the delegate.

use crate::delegate::FilterDelegate;
use crate::engine::FilterTranslator;
use catalog_filter_ast::{Expression, LikePredicate};
use catalog_filter_diagnostics::{FLT0003, FLT0004, FilterError, Result};

/// Canonical multi-character wildcard
pub const WILDCARD: char = '*';
/// Canonical single-character wildcard
pub const SINGLE_CHAR: char = '?';
/// Canonical escape character
pub const ESCAPE: char = '\\';

/// Validated like control characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeControls {
    pub wildcard: char,
    pub single_char: char,
    pub escape: char,
}

impl Default for LikeControls {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD,
            single_char: SINGLE_CHAR,
            escape: ESCAPE,
        }
    }
}

fn single_char(role: &str, text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FilterError::unsupported(
            FLT0004,
            format!("like {role} must be exactly one character, got '{text}'"),
        )),
    }
}

impl LikeControls {
    /// Validate caller-supplied control characters
    ///
    /// Each must be a single character and all three must differ.
    pub fn validate(wildcard: &str, single: &str, escape: &str) -> Result<Self> {
        let controls = Self {
            wildcard: single_char("wildcard", wildcard)?,
            single_char: single_char("single character", single)?,
            escape: single_char("escape", escape)?,
        };
        if controls.wildcard == controls.single_char
            || controls.wildcard == controls.escape
            || controls.single_char == controls.escape
        {
            return Err(FilterError::unsupported(
                FLT0004,
                format!(
                    "like control characters must be distinct, got '{wildcard}', '{single}', '{escape}'"
                ),
            ));
        }
        Ok(controls)
    }

    /// Rewrite `pattern` into canonical markers
    ///
    /// An escaped control character stays escaped, an escaped ordinary
    /// character loses its escape, and a trailing escape is dropped.
    pub fn normalize(&self, pattern: &str) -> String {
        let mut normalized = String::with_capacity(pattern.len());
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c == self.escape {
                if let Some(next) = chars.next() {
                    match self.canonical(next) {
                        Some(marker) => {
                            normalized.push(ESCAPE);
                            normalized.push(marker);
                        }
                        None => normalized.push(next),
                    }
                }
            } else if c == self.wildcard {
                normalized.push(WILDCARD);
            } else if c == self.single_char {
                normalized.push(SINGLE_CHAR);
            } else {
                normalized.push(c);
            }
        }

        normalized
    }

    /// Canonical marker for a control character
    fn canonical(&self, c: char) -> Option<char> {
        if c == self.wildcard {
            Some(WILDCARD)
        } else if c == self.single_char {
            Some(SINGLE_CHAR)
        } else if c == self.escape {
            Some(ESCAPE)
        } else {
            None
        }
    }
}

/// Whether a property name addresses a document path
fn is_xpath(name: &str) -> bool {
    name.contains('/') || name.contains('@')
}

/// Whether a normalized pattern only tests for presence
fn matches_anything(pattern: &str) -> bool {
    let trimmed = pattern.trim();
    trimmed.is_empty() || trimmed.chars().eq([WILDCARD])
}

impl FilterTranslator {
    /// Translate a like predicate
    pub(crate) fn visit_like<D: FilterDelegate>(
        &self,
        like: &LikePredicate,
        delegate: &D,
    ) -> Result<D::Output> {
        let controls = LikeControls::validate(&like.wildcard, &like.single_char, &like.escape)?;
        let (name, fuzzy) = self.like_target(&like.expression)?;
        let pattern = controls.normalize(&like.pattern);

        match (is_xpath(&name), fuzzy) {
            (false, false) => delegate.like(&name, &pattern, like.match_case),
            (false, true) => delegate.fuzzy_like(&name, &pattern),
            (true, false) if matches_anything(&pattern) => delegate.xpath_exists(&name),
            (true, false) => delegate.xpath_like(&name, &pattern, like.match_case),
            (true, true) => delegate.xpath_fuzzy_like(&name, &pattern),
        }
    }

    /// Resolve the matched property and whether it is fuzzy-wrapped
    fn like_target(&self, expression: &Expression) -> Result<(String, bool)> {
        match expression {
            Expression::Function(call) if self.config().is_fuzzy_function(&call.name) => {
                match call.args.as_slice() {
                    [property @ Expression::PropertyRef(_)] => {
                        Ok((self.visit_property(property)?, true))
                    }
                    _ => Err(FilterError::unsupported(
                        FLT0003,
                        format!("'{}' must wrap exactly one PropertyRef", call.name),
                    )),
                }
            }
            Expression::Function(call) => Err(FilterError::unsupported(
                FLT0003,
                format!("Like does not accept function operand '{}'", call.name),
            )),
            other => Ok((self.visit_property(other)?, false)),
        }
    }
}
