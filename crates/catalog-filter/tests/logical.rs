//! Logical combinator tests
//!
//! Tests for: And, Or, Not, IncludeAll, ExcludeAll

mod common;

use catalog_filter::build::{and, equal, greater_than, literal, not, or, property};
use catalog_filter::diagnostics::FLT0009;
use catalog_filter::Predicate;
use common::{RecordingDelegate, render, translator};
use pretty_assertions::assert_eq;

fn title_is_roads() -> Predicate {
    equal(property("title"), literal("roads"))
}

#[test]
fn test_single_child_and_is_elided() {
    let delegate = RecordingDelegate::new();
    let out = translator()
        .translate(Some(&and(vec![title_is_roads()])), &delegate)
        .unwrap();

    assert_eq!(out, render(&title_is_roads()));
    assert_eq!(delegate.methods(), vec!["equal_to_string"]);
}

#[test]
fn test_empty_and_fails() {
    let err = translator()
        .translate(Some(&and(vec![])), &RecordingDelegate::new())
        .unwrap_err();
    assert_eq!(err.code(), FLT0009);
}

#[test]
fn test_and_combines_children_in_order() {
    let delegate = RecordingDelegate::new();
    let filter = and(vec![
        title_is_roads(),
        greater_than(property("scale"), literal(10)),
    ]);
    let out = translator().translate(Some(&filter), &delegate).unwrap();

    assert_eq!(
        out,
        "and(equal_to_string(title, 'roads', true), greater_than_int(scale, 10))"
    );
    assert_eq!(
        delegate.methods(),
        vec!["equal_to_string", "greater_than_int", "and"]
    );
}

#[test]
fn test_single_child_or_is_kept() {
    assert_eq!(
        render(&or(vec![title_is_roads()])),
        "or(equal_to_string(title, 'roads', true))"
    );
}

#[test]
fn test_empty_or_fails() {
    let err = translator()
        .translate(Some(&or(vec![])), &RecordingDelegate::new())
        .unwrap_err();
    assert_eq!(err.code(), FLT0009);
}

#[test]
fn test_not() {
    assert_eq!(
        render(&not(title_is_roads())),
        "not(equal_to_string(title, 'roads', true))"
    );
}

#[test]
fn test_include_and_exclude() {
    assert_eq!(render(&Predicate::IncludeAll), "include()");
    assert_eq!(render(&Predicate::ExcludeAll), "exclude()");
}

#[test]
fn test_error_stops_traversal() {
    let delegate = RecordingDelegate::new();
    let filter = and(vec![
        title_is_roads(),
        Predicate::Id(vec!["roads.1".to_string()]),
        greater_than(property("scale"), literal(10)),
    ]);

    assert!(translator().translate(Some(&filter), &delegate).is_err());
    assert_eq!(delegate.methods(), vec!["equal_to_string"]);
}
