/// Parsing errors.
///
/// Defines the syntax errors the parser records when the token stream does
/// not match the grammar. The lexer has no error channel of its own: bytes it
/// cannot classify surface as `ILLEGAL` tokens instead.
pub mod parse_error;

pub use parse_error::ParseError;
