//! Temporal relation tests
//!
//! Tests for: After, Before, During, Begins and the unsupported relations

mod common;

use catalog_filter::ast::{Operands, Predicate};
use catalog_filter::build::{after, before, begins, during, literal, period, property};
use catalog_filter::diagnostics::{FLT0001, FLT0007, FLT0105};
use catalog_filter::{Expression, TypedValue};
use common::{RecordingDelegate, render, translator, utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn first_quarter() -> Expression {
    period(utc(2024, 1, 1), utc(2024, 4, 1))
}

fn translate_err(filter: &Predicate) -> catalog_filter::TranslateError {
    translator()
        .translate(Some(filter), &RecordingDelegate::new())
        .unwrap_err()
}

#[rstest]
#[case(
    after(property("modified"), literal(utc(2024, 1, 1))),
    "after(modified, 2024-01-01T00:00:00Z)"
)]
#[case(
    after(property("modified"), first_quarter()),
    "after(modified, 2024-04-01T00:00:00Z)"
)]
#[case(
    before(property("modified"), Expression::Literal(Some(TypedValue::Instant(utc(2024, 1, 1))))),
    "before(modified, 2024-01-01T00:00:00Z)"
)]
#[case(
    before(property("modified"), first_quarter()),
    "before(modified, 2024-01-01T00:00:00Z)"
)]
#[case(
    during(property("modified"), first_quarter()),
    "during(modified, 2024-01-01T00:00:00Z, 2024-04-01T00:00:00Z)"
)]
#[case(
    begins(property("modified"), first_quarter()),
    "begins(modified, 2024-01-01T00:00:00Z, 2024-04-01T00:00:00Z)"
)]
fn test_temporal_dispatch(#[case] filter: Predicate, #[case] expected: &str) {
    assert_eq!(render(&filter), expected);
}

#[test]
fn test_during_duration_literal() {
    let filter = during(
        property("modified"),
        Expression::Literal(Some(TypedValue::Duration(3_600_000))),
    );
    assert_eq!(render(&filter), "relative(modified, 3600000)");
}

#[rstest]
#[case("RELATIVE(P1D)", 86_400_000)]
#[case("RELATIVE(PT1.5H)", 5_400_000)]
// 2024-02-15T12:00 to 2024-03-15T12:00 spans 29 days
#[case("RELATIVE(P1M)", 2_505_600_000)]
fn test_during_relative_token(#[case] token: &str, #[case] millis: i64) {
    assert_eq!(
        render(&during(property("modified"), literal(token))),
        format!("relative(modified, {millis})")
    );
}

#[test]
fn test_during_bad_relative_token() {
    let err = translate_err(&during(property("modified"), literal("RELATIVE(1D)")));
    assert_eq!(err.code(), FLT0105);
}

#[rstest]
#[case(after(property("modified"), literal(5)))]
#[case(before(property("modified"), literal("yesterday")))]
#[case(during(property("modified"), literal("last week")))]
#[case(during(property("modified"), literal(utc(2024, 1, 1))))]
#[case(begins(property("modified"), literal(utc(2024, 1, 1))))]
fn test_unsupported_literal_kinds(#[case] filter: Predicate) {
    assert_eq!(translate_err(&filter).code(), FLT0007);
}

#[rstest]
#[case(Predicate::BegunBy)]
#[case(Predicate::EndedBy)]
#[case(Predicate::Ends)]
#[case(Predicate::Meets)]
#[case(Predicate::MetBy)]
#[case(Predicate::OverlappedBy)]
#[case(Predicate::AnyInteracts)]
#[case(Predicate::TContains)]
#[case(Predicate::TEquals)]
#[case(Predicate::TOverlaps)]
fn test_unsupported_relations(#[case] relation: fn(Operands) -> Predicate) {
    let filter = relation(Operands::new(property("modified"), first_quarter()));
    assert_eq!(translate_err(&filter).code(), FLT0001);
}
