//! Unit tests for parser error construction and formatting.

use crate::lexer::tokens::TokenKind;

use super::errors::{ParseErrorKind, ParserError};

#[test]
fn test_unexpected_token_message() {
    let error = ParserError::new(
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Integer,
        },
        3,
        "let x 5;",
    );

    assert_eq!(
        error.message(),
        "expected next token to be Assignment, got Integer instead (on line 3)"
    );
    assert_eq!(error.to_string(), error.message());
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParserError::new(
        ParseErrorKind::NoPrefixParseFn {
            kind: TokenKind::Plus,
        },
        1,
        "+;",
    );

    assert_eq!(
        error.message(),
        "no prefix parse function for Plus found (on line 1)"
    );
}

#[test]
fn test_invalid_integer_message() {
    let error = ParserError::new(
        ParseErrorKind::InvalidInteger {
            literal: "92233720368547758079".to_string(),
        },
        7,
        "let big = 92233720368547758079;",
    );

    assert_eq!(
        error.message(),
        "could not parse \"92233720368547758079\" as integer (on line 7)"
    );
}

#[test]
fn test_error_names() {
    let unexpected = ParserError::new(
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Semicolon,
            got: TokenKind::EOF,
        },
        1,
        "",
    );
    let no_prefix = ParserError::new(
        ParseErrorKind::NoPrefixParseFn {
            kind: TokenKind::Star,
        },
        1,
        "",
    );
    let invalid = ParserError::new(
        ParseErrorKind::InvalidInteger {
            literal: "x".to_string(),
        },
        1,
        "",
    );

    assert_eq!(unexpected.get_error_name(), "UnexpectedToken");
    assert_eq!(no_prefix.get_error_name(), "NoPrefixParseFn");
    assert_eq!(invalid.get_error_name(), "InvalidInteger");
}

#[test]
fn test_accessors_preserve_context() {
    let error = ParserError::new(
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            got: TokenKind::EOF,
        },
        12,
        "  if x {",
    );

    assert_eq!(error.line_number(), 12);
    assert_eq!(error.source_line(), "  if x {");
    assert_eq!(
        *error.kind(),
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            got: TokenKind::EOF,
        }
    );
}
