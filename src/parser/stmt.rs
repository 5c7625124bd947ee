use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, IfStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParserError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Statement dispatch: purely on the current token's kind. Unregistered
/// kinds fall through to an expression statement, which is never an error
/// by itself.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParserError> {
    let kind = parser.current_token_kind();
    if parser.get_stmt_lookup().contains_key(&kind) {
        let handler = *parser.get_stmt_lookup().get(&kind).unwrap();
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParserError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    // The trailing semicolon is optional after an expression statement
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// `let IDENT = <expr> ;`
pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParserError> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::from_token(parser.current_token().clone());

    parser.expect_peek(TokenKind::Assignment)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(LetStmt { token, name, value }))
}

/// `return <expr> ;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParserError> {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

/// `if <expr> { block } (else if <expr> { block })* (else { block })?`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParserError> {
    Ok(StmtWrapper::new(parse_if_chain(parser)?))
}

fn parse_if_chain(parser: &mut Parser) -> Result<IfStmt, ParserError> {
    let token = parser.current_token().clone();

    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let mut alternative = None;
    let mut else_if = None;

    if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if parser.peek_token_is(TokenKind::If) {
            parser.advance();
            else_if = Some(Box::new(parse_if_chain(parser)?));
        } else {
            parser.expect_peek(TokenKind::OpenCurly)?;
            alternative = Some(parse_block_stmt(parser)?);
        }
    }

    Ok(IfStmt {
        token,
        condition,
        consequence,
        alternative,
        else_if,
    })
}

/// Parses a `{ ... }` block. The current token must be `{` on entry; on
/// return it is the closing `}`. Hitting `EOF` first is an error, not a
/// hang.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, ParserError> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.cur_token_is(TokenKind::CloseCurly) {
        if parser.cur_token_is(TokenKind::EOF) {
            return Err(parser.current_error(TokenKind::CloseCurly));
        }
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
