use super::tokens::{Token, TokenKind, COMPOUND_LOOKUP, RESERVED_LOOKUP};

/// End-of-input sentinel. Never a valid identifier, number, or operator
/// character.
const NUL: u8 = 0;

/// Pull-based lexer over an in-memory source string.
///
/// One token is produced per `next_token` call. The cursor only ever moves
/// forward; lookahead past the current character is done with a
/// non-consuming `peek_char`, never by rewinding.
pub struct Lexer {
    input: Vec<u8>,
    /// Source split into lines, kept for error reporting.
    lines: Vec<String>,
    /// Index of the current character.
    position: usize,
    /// Index of the next character to read.
    read_position: usize,
    /// Current character, or `NUL` once the input is exhausted.
    ch: u8,
    /// 1-based line number of the cursor.
    line: usize,
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_number(ch: u8) -> bool {
    ch.is_ascii_digit()
}

fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\n' || ch == b'\r'
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let mut lexer = Lexer {
            input: input.as_bytes().to_vec(),
            lines: input.split('\n').map(String::from).collect(),
            position: 0,
            read_position: 0,
            ch: NUL,
            line: 1,
        };
        lexer.read_char();
        lexer
    }

    /// 1-based line number the cursor is currently on.
    pub fn current_line_number(&self) -> usize {
        self.line
    }

    /// Literal text of the line the cursor is currently on.
    pub fn current_line(&self) -> &str {
        self.lines
            .get(self.line - 1)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if is_number(self.ch) {
            return Token::new(TokenKind::Integer, self.read_number());
        }

        if let Some(kind) = TokenKind::from_char(self.ch) {
            let token = self.read_operator(kind);
            self.read_char();
            return token;
        }

        if is_letter(self.ch) {
            let literal = self.read_identifier();
            return match RESERVED_LOOKUP.get(literal.as_str()) {
                Some(kind) => Token::new(*kind, literal),
                None => Token::new(TokenKind::Identifier, literal),
            };
        }

        if self.ch == NUL {
            return Token::eof();
        }

        let token = Token::new(TokenKind::Illegal, (self.ch as char).to_string());
        self.read_char();
        token
    }

    /// Builds the token for a recognised operator/punctuation character,
    /// preferring the two-character form when the peeked character completes
    /// one (maximal munch: `<=` is one token, never `<` then `=`).
    fn read_operator(&mut self, single_kind: TokenKind) -> Token {
        let next = self.peek_char();
        if next != NUL {
            let compound = [self.ch, next];
            // bytes come straight from an operator match, always ASCII
            let compound = std::str::from_utf8(&compound).unwrap();
            if let Some(kind) = COMPOUND_LOOKUP.get(compound) {
                self.read_char();
                return Token::new(*kind, compound);
            }
        }
        Token::new(single_kind, (self.ch as char).to_string())
    }

    fn read_char(&mut self) {
        if self.ch == b'\n' {
            self.line += 1;
        }
        if self.read_position >= self.input.len() {
            self.ch = NUL;
        } else {
            self.ch = self.input[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            NUL
        } else {
            self.input[self.read_position]
        }
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        // Digits deliberately do not continue an identifier in this grammar.
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[position..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_number(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[position..self.position]).into_owned()
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.ch) {
            self.read_char();
        }
    }
}
