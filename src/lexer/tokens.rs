use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };

    /// Two-character operators, keyed by the exact lexeme. A character that
    /// starts one of these gets a one-byte peek before its single-character
    /// token is emitted.
    pub static ref COMPOUND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("+=", TokenKind::PlusEquals);
        map.insert("-=", TokenKind::MinusEquals);
        map.insert("*=", TokenKind::StarEquals);
        map.insert("/=", TokenKind::SlashEquals);
        map.insert("=>", TokenKind::Lambda);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Identifier,
    Integer,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    Lambda, // =>

    Plus,
    Dash,
    Slash,
    Star,

    Dot,
    Semicolon,
    Comma,

    // Reserved
    Let,
    Fn,
    Return,
    If,
    Else,
    True,
    False,
}

impl TokenKind {
    /// Maps a single character to its token kind, if it is one on its own.
    pub fn from_char(ch: u8) -> Option<TokenKind> {
        match ch {
            b'=' => Some(TokenKind::Assignment),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Dash),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            b'!' => Some(TokenKind::Not),
            b'<' => Some(TokenKind::Less),
            b'>' => Some(TokenKind::Greater),
            b'(' => Some(TokenKind::OpenParen),
            b')' => Some(TokenKind::CloseParen),
            b'{' => Some(TokenKind::OpenCurly),
            b'}' => Some(TokenKind::CloseCurly),
            b'[' => Some(TokenKind::OpenBracket),
            b']' => Some(TokenKind::CloseBracket),
            b',' => Some(TokenKind::Comma),
            b';' => Some(TokenKind::Semicolon),
            b'.' => Some(TokenKind::Dot),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Token {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Token {
        Token {
            kind: TokenKind::EOF,
            literal: String::new(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, literal: {} }}",
            self.kind, self.literal
        )
    }
}
