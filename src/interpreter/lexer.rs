use crate::interpreter::token::{Token, TokenKind, lookup_ident};

/// Sentinel stored in the cursor once the input is exhausted.
const NUL: u8 = 0;

/// A hand-rolled scanner over an immutable source buffer.
///
/// The lexer keeps a one-character cursor into the borrowed input and produces
/// tokens lazily, one per call to [`Lexer::next_token`]. It never fails:
/// characters that match no rule come back as `Illegal` tokens and the parser
/// decides what to do with them.
///
/// Once the input is exhausted every further call returns `Eof`. A fresh
/// lexer over the same input starts again from the beginning.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("x != 10;");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| Some(lexer.next_token().kind))
///     .take(5)
///     .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Ident, TokenKind::NotEq, TokenKind::Int, TokenKind::Semicolon, TokenKind::Eof]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input:         &'a str,
    // Index of `ch` in `input`.
    position:      usize,
    // Index of the byte after `ch`.
    read_position: usize,
    ch:            u8,
    line:          usize,
    // Set once `Eof` has been handed out.
    finished:      bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned on the first character of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self { input,
                               position: 0,
                               read_position: 0,
                               ch: NUL,
                               line: 1,
                               finished: false };
        lexer.read_char();
        lexer
    }

    /// Scans and returns the next token, advancing past every character it
    /// consumed.
    ///
    /// Whitespace is skipped silently. `==` and `!=` are recognized only when
    /// both characters are adjacent; identifiers and integers take the longest
    /// run of matching characters. At end of input the returned token is `Eof`
    /// with an empty literal, and it stays that way on every later call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let line = self.line;
        if self.is_at_end() {
            self.finished = true;
            return Token::eof(line);
        }

        let start = self.position;
        let kind = match self.ch {
            b'=' => self.one_or_two(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.one_or_two(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            c if is_letter(c) => {
                let literal = self.read_while(is_letter);
                return Token::new(lookup_ident(literal), literal, line);
            },
            c if is_digit(c) => {
                let literal = self.read_while(is_digit);
                return Token::new(TokenKind::Int, literal, line);
            },
            c if !c.is_ascii() => {
                // Keep the whole scalar together so the literal stays valid UTF-8.
                let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.read_char();
                }
                TokenKind::Illegal
            },
            _ => TokenKind::Illegal,
        };

        self.read_char();
        Token::new(kind, &self.input[start..self.position], line)
    }

    /// Index of the character under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Index of the next character to be read.
    #[must_use]
    pub const fn read_position(&self) -> usize {
        self.read_position
    }

    /// The byte under the cursor, or NUL once the input is exhausted.
    #[must_use]
    pub const fn current_char(&self) -> u8 {
        self.ch
    }

    /// The 1-based line the cursor is on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    const fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn read_char(&mut self) {
        let len = self.input.len();
        if self.read_position >= len {
            self.ch = NUL;
            self.position = len;
            self.read_position = len;
        } else {
            self.ch = self.input.as_bytes()[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.input.as_bytes().get(self.read_position).copied().unwrap_or(NUL)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.ch) {
            if self.ch == b'\n' {
                self.line += 1;
            }
            self.read_char();
        }
    }

    /// Consumes the maximal run of characters accepted by `accept`, starting
    /// at the cursor, and returns it.
    fn read_while(&mut self, accept: fn(u8) -> bool) -> &'a str {
        let start = self.position;
        while !self.is_at_end() && accept(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    /// Picks `double` and consumes the peeked character when it equals
    /// `second`, otherwise picks `single`.
    fn one_or_two(&mut self, second: u8, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == second {
            self.read_char();
            double
        } else {
            single
        }
    }
}

/// Yields every token up to and including the first `Eof`, then stops.
///
/// An `Eof` already returned by [`Lexer::next_token`] counts as the first
/// one, so iterating an exhausted lexer yields nothing.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

const fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

const fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}
