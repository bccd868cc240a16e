use std::fmt;

/// The closed set of token classes produced by the lexer.
///
/// Punctuation kinds are named after the symbol they stand for; the remaining
/// kinds cover identifiers, literals, keywords and the two sentinel kinds
/// `Illegal` and `Eof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character that matched no lexical rule.
    Illegal,
    /// End of input. Repeats forever once reached.
    Eof,

    /// A user-defined name such as `foobar`.
    Ident,
    /// An integer literal such as `123`.
    Int,
    /// Reserved for string literals; never produced by the lexer yet.
    String,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `"`. Reserved alongside `String`.
    Quote,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Returns the canonical name of the kind.
    ///
    /// Punctuation renders as its symbol, everything else as an upper-case
    /// tag. This is the text used in parser error messages.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Assign.as_str(), "=");
    /// assert_eq!(TokenKind::Int.as_str(), "INT");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Quote => "\"",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }

    /// Returns `true` for kinds produced from the keyword table.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::Function | Self::Let | Self::True | Self::False | Self::If | Self::Else | Self::Return)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of source text.
///
/// The literal borrows from the input the lexer was built over, so tokens are
/// cheap to copy around the parser's lookahead window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The class of the token.
    pub kind:    TokenKind,
    /// The exact source text that produced the token. Empty for `Eof`.
    pub literal: &'a str,
    /// The 1-based line the token starts on.
    pub line:    usize,
}

impl<'a> Token<'a> {
    /// Creates a token from its parts.
    #[must_use]
    pub const fn new(kind: TokenKind, literal: &'a str, line: usize) -> Self {
        Self { kind, literal, line }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               literal: "",
               line }
    }

    /// Returns `true` if the token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.line, self.kind, self.literal)
    }
}

const KEYWORDS: [(&str, TokenKind); 7] = [("fn", TokenKind::Function),
                                          ("let", TokenKind::Let),
                                          ("true", TokenKind::True),
                                          ("false", TokenKind::False),
                                          ("if", TokenKind::If),
                                          ("else", TokenKind::Else),
                                          ("return", TokenKind::Return)];

/// Classifies a scanned identifier against the keyword table.
///
/// Keywords map to their dedicated kind; every other name is an `Ident`.
///
/// # Example
/// ```
/// use monkey::interpreter::token::{TokenKind, lookup_ident};
///
/// assert_eq!(lookup_ident("let"), TokenKind::Let);
/// assert_eq!(lookup_ident("lettuce"), TokenKind::Ident);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.iter()
            .find(|(word, _)| *word == ident)
            .map_or(TokenKind::Ident, |(_, kind)| *kind)
}
