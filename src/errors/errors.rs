use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A single recoverable parse failure, annotated with the literal source
/// line it occurred on and its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    kind: ParseErrorKind,
    line_number: usize,
    source_line: String,
}

impl ParserError {
    pub fn new(kind: ParseErrorKind, line_number: usize, source_line: impl Into<String>) -> Self {
        ParserError {
            kind,
            line_number,
            source_line: source_line.into(),
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The literal text of the offending source line.
    pub fn source_line(&self) -> &str {
        &self.source_line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorKind::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseErrorKind::InvalidInteger { .. } => "InvalidInteger",
        }
    }

    pub fn message(&self) -> String {
        format!("{} (on line {})", self.kind, self.line_number)
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
}
