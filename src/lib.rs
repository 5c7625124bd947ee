#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

use crate::errors::errors::ParserError;

/// Renders a parser error the way a CLI would print it:
///
/// ```text
/// Error: expected next token to be Assignment, got Integer instead (on line 1)
///   |
/// 1 | let x 5;
///   |
/// ```
///
/// The offending line is carried inside the error itself, so no source
/// lookup is needed here.
pub fn format_error(error: &ParserError) -> String {
    let line_string = error.line_number().to_string();
    let padding = line_string.len() + 2;

    let (line_text, _removed) = remove_starting_whitespace(error.source_line());

    let mut out = format!("Error: {}\n", error.message());
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{ParseErrorKind, ParserError};
    use crate::lexer::tokens::TokenKind;

    #[test]
    fn test_format_error() {
        let error = ParserError::new(
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Assignment,
                got: TokenKind::Integer,
            },
            1,
            "  let x 5;",
        );

        let rendered = super::format_error(&error);
        assert!(rendered.contains("expected next token to be Assignment"));
        assert!(rendered.contains("1 | let x 5;"));
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (trimmed, removed) = super::remove_starting_whitespace("   let x = 5;");
        assert_eq!(trimmed, "let x = 5;");
        assert_eq!(removed, 3);
    }
}
