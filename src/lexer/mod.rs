//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - One-token-per-call, pull-based tokenization over a byte cursor
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Maximal munch for two-character operators (`==`, `<=`, `+=`, ...)
//! - Line tracking for error reporting
//!
//! Lexing never fails: unrecognised characters degrade to `Illegal` tokens
//! and the end of input is reported as an endless run of `EOF` tokens.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
