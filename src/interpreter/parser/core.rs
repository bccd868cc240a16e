use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// The parser's two-token lookahead window.
///
/// `current` is the token under examination and `peek` the next one to be
/// consumed. The window only moves through [`Window::shift`], which hands back
/// the token that left it, so every consumption is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    current: Token<'a>,
    peek:    Token<'a>,
}

impl<'a> Window<'a> {
    /// Creates a window over two consecutive tokens.
    #[must_use]
    pub const fn new(current: Token<'a>, peek: Token<'a>) -> Self {
        Self { current, peek }
    }

    /// The token under examination.
    #[must_use]
    pub const fn current(&self) -> &Token<'a> {
        &self.current
    }

    /// The next token to be consumed.
    #[must_use]
    pub const fn peek(&self) -> &Token<'a> {
        &self.peek
    }

    /// Moves the window one token forward, pulling `next` in behind `peek`,
    /// and returns the token that was current.
    pub const fn shift(&mut self, next: Token<'a>) -> Token<'a> {
        let left = self.current;
        self.current = self.peek;
        self.peek = next;
        left
    }
}

/// Builds a [`Program`] from the tokens of a [`Lexer`].
///
/// The parser pulls tokens on demand into its lookahead window and parses one
/// statement per loop iteration. Syntax errors never stop it: each one is
/// recorded, the statement it occurred in is dropped, and parsing resumes one
/// token further on. Callers must check [`Parser::errors`] after
/// [`Parser::parse_program`] returns.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 5; return x;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexer:  Lexer<'a>,
    window: Window<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes its window with the first two tokens.
    #[must_use]
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               window: Window::new(current, peek),
               errors: Vec::new() }
    }

    /// Parses statements until the current token is `Eof`.
    ///
    /// Every recognized statement is appended in source order. The window
    /// advances at least once per iteration, so parsing always terminates.
    ///
    /// Grammar: `program := statement*`
    ///
    /// # Returns
    /// The statements that parsed. Statements that failed are missing from it.
    ///
    /// # Errors
    /// Failures are not returned: each one is appended to [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program<'a> {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Every error recorded so far, in detection order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// The lookahead window.
    #[must_use]
    pub const fn window(&self) -> &Window<'a> {
        &self.window
    }

    /// The token under examination.
    #[must_use]
    pub const fn current(&self) -> &Token<'a> {
        self.window.current()
    }

    /// The next token to be consumed.
    #[must_use]
    pub const fn peek(&self) -> &Token<'a> {
        self.window.peek()
    }

    /// Returns `true` if the current token is of kind `kind`.
    #[must_use]
    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    /// Returns `true` if the peek token is of kind `kind`.
    #[must_use]
    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Advances the window when the peek token is of kind `kind`.
    ///
    /// This is the single place where the grammar enforces what comes next.
    /// On a mismatch nothing is consumed: `current` stays on the last good
    /// token so the caller decides how to recover.
    ///
    /// # Parameters
    /// - `kind`: The kind the grammar requires after the current token.
    ///
    /// # Returns
    /// - `true` if the peek token matched and the window moved forward.
    /// - `false` if it did not.
    ///
    /// # Errors
    /// Records a [`ParseError::UnexpectedToken`] naming `kind` and the kind
    /// actually found when the peek token does not match.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    /// Pulls the next token from the lexer and returns the one that left the
    /// window.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> Token<'a> {
        let next = self.lexer.next_token();
        self.window.shift(next)
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let peek = *self.peek();
        self.errors.push(ParseError::UnexpectedToken { expected,
                                                       found: peek.kind,
                                                       line: peek.line });
    }
}
