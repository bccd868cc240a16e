/// The token module defines the classified units of source text.
///
/// A token pairs a [`token::TokenKind`] with the exact source text that
/// produced it. The module also owns the keyword table used to tell reserved
/// words apart from user identifiers.
///
/// # Responsibilities
/// - Declares the closed set of token kinds shared by lexer and parser.
/// - Maps identifiers to keyword kinds.
/// - Renders kinds the way error messages refer to them.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text through a one-character cursor and
/// produces tokens lazily, one per call. It has no error channel: characters
/// it cannot classify come back as `ILLEGAL` tokens.
///
/// # Responsibilities
/// - Skips whitespace and tracks source lines.
/// - Resolves two-character operators (`==`, `!=`) with one character of
///   lookahead.
/// - Scans identifiers, keywords and integer literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from a lexer into a two-token lookahead window and
/// turns them into statements. Syntax errors are collected rather than
/// returned, so a single parse reports every problem it finds.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Statement`] nodes.
/// - Records one error per unmet expectation and recovers by moving on.
pub mod parser;
/// The object module defines the values an evaluator produces.
///
/// Evaluating a parsed program yields one of a closed set of values: the null
/// value, a 64-bit integer, or a boolean. Each carries a type tag and a
/// human-readable rendering.
///
/// # Responsibilities
/// - Declares the `Object` enum and its `ObjectKind` tags.
/// - Renders values for display with their `inspect` text.
pub mod object;
/// The interactive front end.
///
/// Reads one line at a time, parses it with a fresh lexer and parser, and
/// prints the parsed program or the syntax errors found.
pub mod repl;
