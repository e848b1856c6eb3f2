//! `lox`: scan a script or an interactive prompt and print the tokens.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lox_scanner::{Console, Diagnostics, scan};

/// Bad command-line usage.
const EXIT_USAGE: u8 = 64;
/// Input contained lexical errors.
const EXIT_DATA_ERR: u8 = 65;
/// Script could not be read.
const EXIT_NO_INPUT: u8 = 66;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    match args.as_slice() {
        [_] => run_prompt(),
        [_, flag] if flag == "--help" || flag == "-h" => usage(),
        [_, path] => run_file(path),
        _ => usage(),
    }
}

/// Install a stderr subscriber only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: lox [script]");
    eprintln!();
    eprintln!("With no script, starts an interactive prompt.");
    eprintln!("Type `exit` or press Ctrl-D to leave.");
    ExitCode::from(EXIT_USAGE)
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let mut console = Console::stderr();
    run(&source, &mut console);

    if console.had_error() {
        ExitCode::from(EXIT_DATA_ERR)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut console = Console::stderr();

    loop {
        print!("lox> ");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "failed to flush prompt");
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error reading input: {e}");
                return ExitCode::FAILURE;
            }
            None => {
                println!();
                return ExitCode::SUCCESS;
            }
        };

        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "exit()" {
            return ExitCode::SUCCESS;
        }

        run(&line, &mut console);
        console.reset();
    }
}

fn run(source: &str, diagnostics: &mut impl Diagnostics) {
    for token in scan(source, diagnostics) {
        println!("{token}");
    }
}
