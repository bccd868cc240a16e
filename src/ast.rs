use std::fmt;

use crate::interpreter::token::Token;

/// A parsed program: every recognized statement in source order.
///
/// Statements that failed to parse are not represented here; their errors
/// live in the parser's error list. A program built alongside a non-empty
/// error list is incomplete and must not be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program<'a> {
    /// Top-level statements, in the order they appear in the source.
    pub statements: Vec<Statement<'a>>,
}

impl<'a> Program<'a> {
    /// Creates an empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self { statements: Vec::new() }
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if no statement was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A top-level statement.
///
/// Value expressions are not materialized yet: the parser skips the tokens
/// between the binding (or `return`) and the terminating `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `let <name> = <value>;`
    Let {
        /// The `let` keyword token.
        token: Token<'a>,
        /// The bound name.
        name:  Identifier<'a>,
    },
    /// `return <value>;`
    Return {
        /// The `return` keyword token.
        token: Token<'a>,
    },
}

impl<'a> Statement<'a> {
    /// The token the statement starts with.
    #[must_use]
    pub const fn token(&self) -> &Token<'a> {
        match self {
            Self::Let { token, .. } | Self::Return { token } => token,
        }
    }

    /// The literal of the token the statement starts with.
    #[must_use]
    pub const fn token_literal(&self) -> &'a str {
        self.token().literal
    }

    /// The source line the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { token, name } => write!(f, "{} {name} = ;", token.literal),
            Self::Return { token } => write!(f, "{} ;", token.literal),
        }
    }
}

/// A name bound by a `let` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    /// The `IDENT` token the name was scanned from.
    pub token: Token<'a>,
    /// The name itself.
    pub value: &'a str,
}

impl<'a> Identifier<'a> {
    /// Builds an identifier from its `IDENT` token.
    #[must_use]
    pub const fn from_token(token: Token<'a>) -> Self {
        Self { token,
               value: token.literal }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}
