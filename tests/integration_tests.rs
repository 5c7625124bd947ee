//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization and parsing, including multi-error
//! collection and diagnostic rendering.

use interpreter::{
    ast::{
        ast::{Expr, Stmt, StmtType},
        statements::{IfStmt, LetStmt},
    },
    errors::errors::ParseErrorKind,
    format_error,
    lexer::tokens::TokenKind,
    parser::parser::parse,
};

#[test]
fn test_parse_simple_program() {
    let source = "
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
";

    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 4);
    for stmt in &program.statements {
        assert_eq!(stmt.get_stmt_type(), StmtType::LetStmt);
    }
}

#[test]
fn test_parse_conditionals_and_compound_assignment() {
    let source = "
let counter = 0;
if counter < 10 {
  counter += 1;
} else if counter == 10 {
  counter = 0;
} else {
  counter -= 1;
}
";

    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 2);

    let if_stmt = program.statements[1]
        .as_any()
        .downcast_ref::<IfStmt>()
        .unwrap();
    assert_eq!(if_stmt.condition.render(), "(counter < 10)");

    let chained = if_stmt.else_if.as_ref().unwrap();
    assert_eq!(chained.condition.render(), "(counter == 10)");
    assert!(chained.alternative.is_some());
}

#[test]
fn test_parse_nested_functions() {
    let source = "
let make_adder = fn(x) {
  return fn(y) { return x + y; };
};
let add_two = make_adder(2);
add_two(5);
";

    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 3);

    let outer = program.statements[0]
        .as_any()
        .downcast_ref::<LetStmt>()
        .unwrap();
    assert_eq!(
        outer.render(),
        "let make_adder = fn(x) { return fn(y) { return (x + y); }; };"
    );
}

#[test]
fn test_render_preserves_precedence() {
    let (program, errors) = parse("let x = 1 + 2 * 3 - -4;");
    assert!(errors.is_empty());
    assert_eq!(program.render(), "let x = ((1 + (2 * 3)) - (-4));");
}

#[test]
fn test_collects_every_error_in_one_pass() {
    let source = "
let x 5;
let y = 10;
let 838383;
let z = x + y;
";

    let (program, errors) = parse(source);

    assert_eq!(errors.len(), 2);
    assert_eq!(
        *errors[0].kind(),
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Integer,
        }
    );
    assert_eq!(errors[0].line_number(), 2);
    assert_eq!(errors[0].source_line(), "let x 5;");
    assert_eq!(
        *errors[1].kind(),
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Integer,
        }
    );
    assert_eq!(errors[1].line_number(), 4);

    // Both well-formed statements survive.
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_format_error_output() {
    let (_, errors) = parse("let a = 1;\nlet b 2;");
    assert_eq!(errors.len(), 1);

    let rendered = format_error(&errors[0]);
    let expected = "\
Error: expected next token to be Assignment, got Integer instead (on line 2)
  |
2 | let b 2;
  |
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_parse_runs_to_end_after_unterminated_block() {
    let (_, errors) = parse("if x { let y = 1;");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        *errors[0].kind(),
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            got: TokenKind::EOF,
        }
    );
}
