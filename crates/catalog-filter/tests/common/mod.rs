//! Common test utilities
//!
//! Shared delegates and fixtures for the integration tests.

#![allow(dead_code)]

pub mod recording;

pub use recording::RecordingDelegate;

use catalog_filter::{FilterDelegate, FilterError, FilterTranslator, Predicate, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed "now" used by relative-time tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Translator pinned to [`fixed_now`]
pub fn translator() -> FilterTranslator {
    FilterTranslator::builder().fixed_now(fixed_now()).build()
}

/// Translate with a fresh recording delegate, returning the rendered query
pub fn render(filter: &Predicate) -> String {
    translator()
        .translate(Some(filter), &RecordingDelegate::new())
        .unwrap()
}

/// Backend that only understands string equality and conjunction
pub struct KeywordOnlyDelegate;

impl FilterDelegate for KeywordOnlyDelegate {
    type Output = String;

    fn and(&self, operands: Vec<String>) -> Result<String> {
        Ok(operands.join(" AND "))
    }

    fn equal_to_string(&self, property: &str, value: &str, _match_case: bool) -> Result<String> {
        Ok(format!("{property}:{value}"))
    }
}

/// Backend whose every comparison fails
pub struct FailingDelegate;

impl FilterDelegate for FailingDelegate {
    type Output = ();

    fn equal_to_string(&self, _property: &str, _value: &str, _match_case: bool) -> Result<()> {
        Err(FilterError::delegate("index is offline"))
    }
}
