use crate::{
    ast::{Identifier, Statement},
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl<'a> Parser<'a> {
    /// Parses the statement starting at the current token.
    ///
    /// Dispatches on the current token:
    /// - `let` starts a [`Statement::Let`].
    /// - `return` starts a [`Statement::Return`].
    ///
    /// Any other token starts no statement and `None` is returned; the outer
    /// loop still consumes it. `None` is also returned for a statement that
    /// failed to parse, after its error has been recorded.
    ///
    /// Grammar: `statement := let_statement | return_statement`
    ///
    /// # Returns
    /// - `Some(statement)` if a statement was recognized and parsed.
    /// - `None` if the current token starts no statement or parsing failed.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement<'a>> {
        match self.current().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => None,
        }
    }

    /// Parses a `let` statement.
    ///
    /// The value is skipped up to the terminating `;` without being built.
    /// Running into end of input instead of `;` still yields the statement.
    ///
    /// Grammar: `let_statement := "let" IDENT "=" <value> ";"`
    ///
    /// # Returns
    /// A [`Statement::Let`] binding the identifier, or `None` on failure.
    ///
    /// # Errors
    /// Records an `UnexpectedToken` error when the identifier or the `=` is
    /// missing. The window is then left on the last good token.
    fn parse_let_statement(&mut self) -> Option<Statement<'a>> {
        let token = *self.current();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(*self.current());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.skip_value();

        Some(Statement::Let { token, name })
    }

    /// Parses a `return` statement, skipping the value like `let` does.
    ///
    /// Grammar: `return_statement := "return" <value> ";"`
    ///
    /// # Returns
    /// Always a [`Statement::Return`]; the rule has nothing to reject.
    fn parse_return_statement(&mut self) -> Option<Statement<'a>> {
        let token = *self.current();

        self.next_token();
        self.skip_value();

        Some(Statement::Return { token })
    }

    // Stops on `;` or at end of input, whichever comes first.
    fn skip_value(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}
