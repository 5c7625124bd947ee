//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single- and two-character operators (maximal munch)
//! - Whitespace handling and line tracking
//! - Illegal characters and end-of-input behavior

use super::{
    lexer::Lexer,
    tokens::{TokenKind, COMPOUND_LOOKUP},
};

fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(input);

    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(
            token.kind, *kind,
            "tests[{}] - wrong kind, literal was {:?}",
            i, token.literal
        );
        assert_eq!(token.literal, *literal, "tests[{}] - wrong literal", i);
    }
}

#[test]
fn test_punctuation_sequence() {
    assert_tokens(
        "=+(){}[],;.*",
        &[
            (TokenKind::Assignment, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::OpenParen, "("),
            (TokenKind::CloseParen, ")"),
            (TokenKind::OpenCurly, "{"),
            (TokenKind::CloseCurly, "}"),
            (TokenKind::OpenBracket, "["),
            (TokenKind::CloseBracket, "]"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Dot, "."),
            (TokenKind::Star, "*"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_keywords() {
    assert_tokens(
        "let fn return if else true false",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Fn, "fn"),
            (TokenKind::Return, "return"),
            (TokenKind::If, "if"),
            (TokenKind::Else, "else"),
            (TokenKind::True, "true"),
            (TokenKind::False, "false"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_identifiers() {
    assert_tokens(
        "foo bar_baz _underscore letter iffy",
        &[
            (TokenKind::Identifier, "foo"),
            (TokenKind::Identifier, "bar_baz"),
            (TokenKind::Identifier, "_underscore"),
            (TokenKind::Identifier, "letter"),
            (TokenKind::Identifier, "iffy"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_identifiers_stop_at_digits() {
    // Digits never continue an identifier in this grammar: the run stops
    // and the digits lex as a separate integer.
    assert_tokens(
        "foo123",
        &[
            (TokenKind::Identifier, "foo"),
            (TokenKind::Integer, "123"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_integers() {
    assert_tokens(
        "5 10 0 75319246",
        &[
            (TokenKind::Integer, "5"),
            (TokenKind::Integer, "10"),
            (TokenKind::Integer, "0"),
            (TokenKind::Integer, "75319246"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_two_char_operators() {
    assert_tokens(
        "== != <= >= += -= *= /= =>",
        &[
            (TokenKind::Equals, "=="),
            (TokenKind::NotEquals, "!="),
            (TokenKind::LessEquals, "<="),
            (TokenKind::GreaterEquals, ">="),
            (TokenKind::PlusEquals, "+="),
            (TokenKind::MinusEquals, "-="),
            (TokenKind::StarEquals, "*="),
            (TokenKind::SlashEquals, "/="),
            (TokenKind::Lambda, "=>"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_maximal_munch() {
    // `<=` must always lex as one token, never `<` followed by `=`.
    assert_tokens(
        "<=",
        &[(TokenKind::LessEquals, "<="), (TokenKind::EOF, "")],
    );
    // Unspaced runs resolve greedily left to right.
    assert_tokens(
        "a<=b==c",
        &[
            (TokenKind::Identifier, "a"),
            (TokenKind::LessEquals, "<="),
            (TokenKind::Identifier, "b"),
            (TokenKind::Equals, "=="),
            (TokenKind::Identifier, "c"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_single_char_operators_not_merged() {
    assert_tokens(
        "! - / * < > =",
        &[
            (TokenKind::Not, "!"),
            (TokenKind::Dash, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Star, "*"),
            (TokenKind::Less, "<"),
            (TokenKind::Greater, ">"),
            (TokenKind::Assignment, "="),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_simple_program() {
    let input = "
  let five = 5;
  let ten = 10;

  let add = fn(x, y) {
    x + y;
  };

  let result = add(five, ten);
  ";
    assert_tokens(
        input,
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "five"),
            (TokenKind::Assignment, "="),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "ten"),
            (TokenKind::Assignment, "="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "add"),
            (TokenKind::Assignment, "="),
            (TokenKind::Fn, "fn"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::OpenCurly, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::CloseCurly, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "result"),
            (TokenKind::Assignment, "="),
            (TokenKind::Identifier, "add"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "ten"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_compound_assignment_statements() {
    assert_tokens(
        "five *= 2; five -= 2; five != 10;",
        &[
            (TokenKind::Identifier, "five"),
            (TokenKind::StarEquals, "*="),
            (TokenKind::Integer, "2"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Identifier, "five"),
            (TokenKind::MinusEquals, "-="),
            (TokenKind::Integer, "2"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Identifier, "five"),
            (TokenKind::NotEquals, "!="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_lambda_arrow() {
    assert_tokens(
        "let test = (a, b) => return a + b;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "test"),
            (TokenKind::Assignment, "="),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "a"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "b"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Lambda, "=>"),
            (TokenKind::Return, "return"),
            (TokenKind::Identifier, "a"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_illegal_character() {
    assert_tokens(
        "let x = @;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assignment, "="),
            (TokenKind::Illegal, "@"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_whitespace_only_input() {
    let mut lexer = Lexer::new("  \t\r\n  ");
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_line_tracking() {
    let mut lexer = Lexer::new("let x = 5;\nlet y 10;\nlet z = 3;");

    // consume through the first line's semicolon
    for _ in 0..5 {
        lexer.next_token();
    }
    assert_eq!(lexer.current_line_number(), 1);
    assert_eq!(lexer.current_line(), "let x = 5;");

    // first token of the second line
    assert_eq!(lexer.next_token().kind, TokenKind::Let);
    assert_eq!(lexer.current_line_number(), 2);
    assert_eq!(lexer.current_line(), "let y 10;");
}

#[test]
fn test_compound_literals_match_consumed_chars() {
    // Every two-character operator's literal is exactly the characters
    // consumed.
    for (lexeme, kind) in COMPOUND_LOOKUP.iter() {
        let mut lexer = Lexer::new(lexeme);
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind);
        assert_eq!(token.literal, *lexeme);
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}
