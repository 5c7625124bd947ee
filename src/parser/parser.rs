//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! A malformed statement never aborts the parse: its error is recorded and
//! the parser skips to the next statement boundary (`;` or `EOF`), so one
//! pass collects every diagnostic the source produces.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{ParseErrorKind, ParserError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer, keeps a two-token lookahead (current + peek),
/// and maintains lookup tables for parsing statements and expressions.
/// Errors accumulate across the whole parse and are never rewound.
pub struct Parser {
    /// The lexer supplying one token per pull
    lexer: Lexer,
    /// The token currently being parsed
    cur_token: Token,
    /// One-token lookahead
    peek_token: Token,
    /// Errors collected so far, in discovery order
    errors: Vec<ParserError>,
    /// 1-based line number of the most recently lexed token
    current_line_number: usize,
    /// Literal text of that line, snapshotted for diagnostics
    current_line: String,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance and primes the two-token lookahead.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
            current_line_number: 1,
            current_line: String::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };

        // fill cur_token and peek_token
        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Returns the kind of the peeked token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Pulls the next token from the lexer, shifting the lookahead window
    /// and snapshotting the lexer's line context for diagnostics.
    pub fn advance(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
        self.current_line_number = self.lexer.current_line_number();
        self.current_line = self.lexer.current_line().to_string();
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peeked token has the expected kind, otherwise returns
    /// an expectation-mismatch error carrying the current source line.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParserError> {
        if self.peek_token_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.peek_error(expected))
        }
    }

    /// Builds the "expected next token to be X, got Y" error for the peeked
    /// token without recording it.
    pub fn peek_error(&self, expected: TokenKind) -> ParserError {
        ParserError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                got: self.peek_token.kind,
            },
            self.current_line_number,
            self.current_line.clone(),
        )
    }

    /// Like [`Parser::peek_error`] but for the current token.
    pub fn current_error(&self, expected: TokenKind) -> ParserError {
        ParserError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                got: self.cur_token.kind,
            },
            self.current_line_number,
            self.current_line.clone(),
        )
    }

    /// Error for a token that cannot start an expression. `Illegal` tokens
    /// surface through this path as well.
    pub fn no_prefix_error(&self, kind: TokenKind) -> ParserError {
        ParserError::new(
            ParseErrorKind::NoPrefixParseFn { kind },
            self.current_line_number,
            self.current_line.clone(),
        )
    }

    pub fn invalid_integer_error(&self) -> ParserError {
        ParserError::new(
            ParseErrorKind::InvalidInteger {
                literal: self.cur_token.literal.clone(),
            },
            self.current_line_number,
            self.current_line.clone(),
        )
    }

    /// Appends an error to the diagnostics buffer. Earlier errors are never
    /// discarded.
    pub fn record_error(&mut self, error: ParserError) {
        self.errors.push(error);
    }

    pub fn take_errors(&mut self) -> Vec<ParserError> {
        std::mem::take(&mut self.errors)
    }

    /// Skips ahead to the next statement boundary (`;` or `EOF`) after a
    /// malformed statement. Bounding the skip keeps recovery from looping
    /// forever on arbitrary input.
    pub fn synchronize(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the peeked token; tokens without an infix production
    /// bind at `Default` and terminate the expression loop.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.cur_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a source string into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates the lexer and
/// parser, initializes all lookup tables, and parses statements until EOF.
/// A malformed statement is recorded and skipped; parsing always runs the
/// source to the end.
///
/// # Returns
///
/// A tuple containing:
/// - The root [`Program`] node (statements that parsed cleanly)
/// - The accumulated errors, in discovery order; empty means a clean parse
pub fn parse(source: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::new(Lexer::new(source));
    create_token_lookups(&mut parser);

    let mut program = Program::new();

    while !parser.cur_token_is(TokenKind::EOF) {
        match parse_stmt(&mut parser) {
            Ok(stmt) => program.statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
        parser.advance();
    }

    let errors = parser.take_errors();
    (program, errors)
}
