use brew_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::ExpectedExpression)
        .with_message("expected expression, found `)`")
        .with_span(Span::new(10, 11))
        .with_note("skipped to the next `;`");

    assert_eq!(diag.code, ErrorCode::ExpectedExpression);
    assert_eq!(diag.span, Span::new(10, 11));
    assert_eq!(diag.note.as_deref(), Some("skipped to the next `;`"));
    assert!(diag.is_error());
    assert!(!diag.is_warning());
}

#[test]
fn test_new_picks_severity_from_code() {
    assert_eq!(
        Diagnostic::new(ErrorCode::RedundantCatchType).severity,
        Severity::Warning
    );
    assert_eq!(
        Diagnostic::new(ErrorCode::MissingCatchOrFinally).severity,
        Severity::Error
    );
}

#[test]
fn test_display() {
    let diag = Diagnostic::warning(ErrorCode::DuplicateDefaultLabel)
        .with_message("duplicate `default` label")
        .with_span(Span::new(4, 12));
    assert_eq!(
        diag.to_string(),
        "warning[W2002]: duplicate `default` label at 4..12"
    );
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}
