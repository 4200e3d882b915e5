use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use tally::evaluate;

/// tally is an easy to use command line evaluator for arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate. When omitted, tally reads expressions
    /// line by line from standard input until `quit`, `exit`, or
    /// end of input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        interactive_loop();
        return;
    };

    let expression = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    match evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Reads expressions line by line, printing each result or error.
///
/// A malformed expression only affects its own line: the error is reported
/// and the loop moves on, since every evaluation is independent.
fn interactive_loop() {
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match evaluate(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
