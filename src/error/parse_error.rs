use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a syntax error recorded while parsing.
///
/// Parse errors never abort parsing: each one abandons only the statement it
/// was found in, and the parser keeps collecting them in detection order.
pub enum ParseError {
    /// The token after the current one did not have the kind the grammar
    /// requires at that position.
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
        /// The source line of the offending token.
        line:     usize,
    },
}

impl ParseError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
        }
    }
}

impl std::error::Error for ParseError {}
