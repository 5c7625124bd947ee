//! Error types for the parser.
//!
//! Parsing is a best-effort, multi-error collector: every recoverable
//! failure is recorded as a [`errors::ParserError`] carrying the offending
//! source line and its line number, and parsing resumes at the next
//! statement boundary. The error list preserves discovery order.

pub mod errors;

#[cfg(test)]
mod tests;
