use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use monkey::{
    interpreter::repl::{self, Mode},
    parse_source,
};

/// monkey reads Monkey source code and reports its tokens, its parsed
/// statements, or the syntax errors it contains.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the token stream instead of the parsed program.
    #[arg(short, long)]
    tokens: bool,

    /// A script to parse. Starts an interactive session when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mode = if args.tokens { Mode::Tokens } else { Mode::Parse };

    let Some(path) = args.file else {
        println!("Hello! This is the Monkey programming language!");
        println!("Feel free to type in commands");

        let stdin = io::stdin();
        return match repl::start(stdin.lock(), io::stdout(), mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let Ok(script) = fs::read_to_string(&path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let mut stdout = io::stdout().lock();
    let written = match mode {
        Mode::Tokens => repl::print_tokens(&mut stdout, &script),
        Mode::Parse => match parse_source(&script) {
            Ok(program) => writeln!(stdout, "{program}"),
            Err(errors) => {
                for error in &errors {
                    eprintln!("{}:{}: {error}", path.display(), error.line());
                }
                return ExitCode::FAILURE;
            },
        },
    };

    if let Err(e) = written {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
