//! # monkey
//!
//! monkey is the lexical and syntactic front end of the Monkey programming
//! language. It turns source text into a stream of classified tokens and then
//! into a program of statements, collecting every syntax error along the way.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::Lexer, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program` and `Statement` types that represent
/// the syntactic structure of source code. The tree is built by the parser
/// and handed to whatever evaluates it.
///
/// # Responsibilities
/// - Defines a closed statement type for every recognized construct.
/// - Keeps the originating token of each node for error reporting.
pub mod ast;
/// Provides error types for parsing.
///
/// This module defines the errors the parser records when the token stream
/// does not match the grammar, with the line they were found on.
pub mod error;
/// Ties lexing, parsing and the interactive front end together.
///
/// # Responsibilities
/// - Exposes the token model, the lexer and the parser.
/// - Provides the read loop used by the `monkey` binary.
pub mod interpreter;

/// Parses `source` into a program.
///
/// Runs a fresh lexer and parser over the whole source. The program is only
/// returned when no syntax error was recorded; otherwise every error is
/// returned, in the order it was detected.
///
/// # Errors
/// Returns the full error list when parsing records at least one error.
///
/// # Examples
/// ```
/// use monkey::parse_source;
///
/// let program = parse_source("let five = 5;").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// let errors = parse_source("let x 5;").unwrap_err();
/// assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");
/// ```
pub fn parse_source(source: &str) -> Result<Program<'_>, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() { Ok(program) } else { Err(errors) }
}
