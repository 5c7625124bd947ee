use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            AssignmentExpr, BinaryExpr, BooleanExpr, CallExpr, FunctionExpr, Identifier,
            IntegerExpr, PrefixExpr,
        },
    },
    errors::errors::ParserError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// The precedence-climbing loop. Invokes the NUD handler for the current
/// token, then folds in LED handlers while the peeked operator binds
/// tighter than `bp`. Every token is consumed exactly once; no
/// backtracking.
///
/// NUD/LED convention: a handler leaves the current token on the last token
/// of the (sub-)expression it built.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParserError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(parser.no_prefix_error(token_kind));
    }

    let nud = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud(parser)?;

    // While the peeked token's binding power exceeds bp, keep extending lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let token_kind = parser.peek_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Ok(left);
        }

        let led = *parser.get_led_lookup().get(&token_kind).unwrap();
        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, ParserError> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.current_token().clone();
            match token.literal.parse::<i64>() {
                Ok(value) => Ok(ExprWrapper::new(IntegerExpr { token, value })),
                Err(_) => Err(parser.invalid_integer_error()),
            }
        }
        TokenKind::Identifier => {
            let token = parser.current_token().clone();
            Ok(ExprWrapper::new(Identifier::from_token(token)))
        }
        kind => Err(parser.no_prefix_error(kind)),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(ExprWrapper::new(BooleanExpr { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: token.literal.clone(),
        token,
        right,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        operator: token.literal.clone(),
        token,
        left,
        right,
    }))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprWrapper,
) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();
    parser.advance();
    // Default makes chained assignment right-associative
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        operator: token.literal.clone(),
        token,
        assignee: left,
        value,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, ParserError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();
    let arguments = parse_call_args(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        token,
        callee: left,
        arguments,
    }))
}

fn parse_call_args(parser: &mut Parser) -> Result<Vec<ExprWrapper>, ParserError> {
    let mut args = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(args)
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<ExprWrapper, ParserError> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_params(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_params(parser: &mut Parser) -> Result<Vec<Identifier>, ParserError> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier::from_token(parser.current_token().clone()));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::from_token(parser.current_token().clone()));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}
