use std::collections::HashSet;

use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::UnexpectedToken.to_string(), "E1001");
    assert_eq!(ErrorCode::UnterminatedLiteral.as_str(), "E0001");
    assert_eq!(ErrorCode::DuplicateDefaultLabel.as_str(), "W2002");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let prefix = &code.as_str()[..2];
        let expected = match prefix {
            "E0" => ErrorCategory::Lex,
            "E1" => ErrorCategory::Syntax,
            "W2" => ErrorCategory::Semantic,
            other => panic!("unknown prefix {other} for {code:?}"),
        };
        assert_eq!(code.category(), expected, "{code:?}");
    }
}

#[test]
fn test_codes_are_unique() {
    let strings: HashSet<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(strings.len(), ErrorCode::ALL.len());
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let count = [code.is_lexer_error(), code.is_parser_error(), code.is_warning()]
            .iter()
            .filter(|&&b| b)
            .count();
        assert_eq!(count, 1, "{code:?} matched {count} predicates");
    }
}

#[test]
fn test_from_str_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}
