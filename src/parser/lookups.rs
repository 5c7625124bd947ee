use std::collections::HashMap;

use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    errors::errors::ParserError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence levels, lowest binds loosest. The expression loop
/// continues only while the peeked operator binds tighter than the level it
/// was entered with, which makes equal-precedence operators left-associative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, ParserError>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, ParserError>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper) -> Result<ExprWrapper, ParserError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment, plain and compound
    parser.led(
        TokenKind::Assignment,
        BindingPower::Assignment,
        parse_assignment_expr,
    );
    parser.led(
        TokenKind::PlusEquals,
        BindingPower::Assignment,
        parse_assignment_expr,
    );
    parser.led(
        TokenKind::MinusEquals,
        BindingPower::Assignment,
        parse_assignment_expr,
    );
    parser.led(
        TokenKind::StarEquals,
        BindingPower::Assignment,
        parse_assignment_expr,
    );
    parser.led(
        TokenKind::SlashEquals,
        BindingPower::Assignment,
        parse_assignment_expr,
    );

    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    parser.led(
        TokenKind::NotEquals,
        BindingPower::Equality,
        parse_binary_expr,
    );

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(
        TokenKind::LessEquals,
        BindingPower::Relational,
        parse_binary_expr,
    );
    parser.led(
        TokenKind::Greater,
        BindingPower::Relational,
        parse_binary_expr,
    );
    parser.led(
        TokenKind::GreaterEquals,
        BindingPower::Relational,
        parse_binary_expr,
    );

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(
        TokenKind::Star,
        BindingPower::Multiplicative,
        parse_binary_expr,
    );
    parser.led(
        TokenKind::Slash,
        BindingPower::Multiplicative,
        parse_binary_expr,
    );

    // Calls bind tightest
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::Fn, parse_fn_expr);

    // Statements; anything unregistered falls through to an expression
    // statement
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
