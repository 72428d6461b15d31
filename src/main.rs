use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use soseol::{
    interpreter::{
        parser::grammar::Grammar,
        session::{Outcome, Session},
    },
    run_script,
};
use tracing_subscriber::EnvFilter;

/// soseol is a tiny, novel-flavored expression language you can talk to one
/// line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Spell the operators as words (더하기, 빼기, 곱하기, 나누기) instead
    /// of the symbols + - * /.
    #[arg(short, long)]
    worded: bool,

    /// A script to run line by line instead of starting an interactive
    /// session.
    script: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();
    let grammar = if args.worded {
        Grammar::worded()
    } else {
        Grammar::symbolic()
    };

    let result = match &args.script {
        Some(path) => {
            let source = fs::read_to_string(path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the script file '{}'. Perhaps this file does not exist?",
                                       path.display());
                             std::process::exit(1);
                         });
            run_script(&source, grammar, io::stdout())
        },
        None => repl(grammar),
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}

/// The interactive read-loop.
///
/// Prints the prompt, pulls one line at a time from stdin, and hands each
/// line to the session until it terminates or stdin reaches end of input.
fn repl(grammar: Grammar) -> io::Result<()> {
    let mut session = Session::new(grammar, io::stdout());
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);

        if session.process_line(line)? == Outcome::Terminate {
            break;
        }
    }

    Ok(())
}
