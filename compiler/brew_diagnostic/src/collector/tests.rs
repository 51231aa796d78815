use brew_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn at(code: ErrorCode, start: u32, message: &str) -> Diagnostic {
    Diagnostic::new(code)
        .with_message(message)
        .with_span(Span::new(start, start + 1))
}

fn messages(collector: &DiagnosticCollector) -> Vec<&str> {
    collector.all().iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn test_empty() {
    let collector = DiagnosticCollector::new();
    assert!(collector.is_empty());
    assert!(!collector.has_errors());
    assert!(collector.all().is_empty());
}

#[test]
fn test_out_of_order_reports_are_sorted() {
    let mut collector = DiagnosticCollector::new();
    collector.report(at(ErrorCode::UnexpectedToken, 20, "c"));
    collector.report(at(ErrorCode::UnexpectedToken, 5, "a"));
    collector.report(at(ErrorCode::UnexpectedToken, 10, "b"));
    assert_eq!(messages(&collector), ["a", "b", "c"]);
}

#[test]
fn test_equal_positions_keep_insertion_order() {
    let mut collector = DiagnosticCollector::new();
    collector.report(at(ErrorCode::ExpectedType, 7, "first"));
    collector.report(at(ErrorCode::ExpectedIdentifier, 7, "second"));
    collector.report(at(ErrorCode::UnexpectedToken, 3, "early"));
    collector.report(at(ErrorCode::ExpectedExpression, 7, "third"));
    assert_eq!(messages(&collector), ["early", "first", "second", "third"]);
}

#[test]
fn test_no_deduplication() {
    let mut collector = DiagnosticCollector::new();
    collector.report(at(ErrorCode::UnexpectedToken, 1, "same"));
    collector.report(at(ErrorCode::UnexpectedToken, 1, "same"));
    assert_eq!(collector.len(), 2);
}

#[test]
fn test_counts() {
    let mut collector = DiagnosticCollector::new();
    collector.report(at(ErrorCode::RedundantCatchType, 1, "w"));
    assert!(!collector.has_errors());
    collector.report(at(ErrorCode::MissingCatchOrFinally, 2, "e"));
    collector.report(at(ErrorCode::DuplicateDefaultLabel, 3, "w"));
    assert!(collector.has_errors());
    assert_eq!(collector.error_count(), 1);
    assert_eq!(collector.warning_count(), 2);
}

#[test]
fn test_extend_and_into_vec() {
    let mut collector = DiagnosticCollector::new();
    collector.extend([
        at(ErrorCode::IllegalCharacter, 9, "late"),
        at(ErrorCode::InvalidEscape, 2, "early"),
    ]);
    let all = collector.into_vec();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].message, "early");
}
