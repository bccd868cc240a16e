/// The parser type and its lookahead window.
///
/// Holds the [`core::Parser`], the token-level primitives every grammar rule
/// is built from, and the program loop that drives statement parsing and
/// error collection.
pub mod core;

/// Statement parsing.
///
/// Implements the rules for `let` and `return` statements and the dispatch
/// that picks between them.
pub mod statement;

pub use self::core::{Parser, Window};
