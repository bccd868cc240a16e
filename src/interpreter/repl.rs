use std::io::{self, BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexer, parser::Parser},
};

/// Printed before every line read.
pub const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r"
  ╭~╮
 C oo⦘
 _❪ ^❫
/   ~\
";

/// What the read loop prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parse the line and print the program, or its syntax errors.
    #[default]
    Parse,
    /// Print the token stream of the line, one token per output line.
    Tokens,
}

/// Runs the interactive read loop until `input` is exhausted.
///
/// Each line gets its own lexer and parser. When parsing records errors they
/// are printed under a banner instead of the program.
///
/// # Errors
/// Returns any I/O error raised while reading `input` or writing `output`.
///
/// # Example
/// ```
/// use monkey::interpreter::repl::{Mode, start};
///
/// let mut output = Vec::new();
/// start("let x = 1;\n".as_bytes(), &mut output, Mode::Parse).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> let x = ;\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match mode {
            Mode::Parse => print_program(&mut output, &line)?,
            Mode::Tokens => print_tokens(&mut output, &line)?,
        }
    }
}

/// Parses `source` and writes either the program or the error banner.
///
/// # Errors
/// Returns any I/O error raised while writing to `output`.
pub fn print_program<W: Write>(output: &mut W, source: &str) -> io::Result<()> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return print_parser_errors(output, parser.errors());
    }
    if !program.is_empty() {
        writeln!(output, "{program}")?;
    }
    Ok(())
}

/// Writes every token of `source`, ending with `EOF`.
///
/// # Errors
/// Returns any I/O error raised while writing to `output`.
pub fn print_tokens<W: Write>(output: &mut W, source: &str) -> io::Result<()> {
    for token in Lexer::new(source) {
        writeln!(output, "{token}")?;
    }
    Ok(())
}

/// Writes the error banner followed by one tab-indented line per error.
///
/// # Errors
/// Returns any I/O error raised while writing to `output`.
pub fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    output.write_all(MONKEY_FACE.as_bytes())?;
    writeln!(output, "Whoops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
