//! # soseol
//!
//! soseol is a tiny, novel-flavored expression language you can talk to one
//! line at a time. Each line is either an arithmetic expression over numbers
//! and quoted text, an output phrase that narrates the result back, or the
//! parting phrase that ends the session.

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

use std::io::{self, Write};

use crate::interpreter::{
    parser::grammar::Grammar,
    session::{Outcome, Session},
};

/// Defines the structure of parsed code.
///
/// This module declares the syntax-tree types built by the parser and walked
/// by the evaluator: values, factors, terms, expressions with their
/// extension-pair lists, and the four statement kinds. One tree is built per
/// input line and discarded after dispatch.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines every failure mode the interpreter can report: input
/// matching no token rule, token sequences matching no statement form, and
/// the recoverable faults raised during evaluation. Each carries enough
/// detail to produce a one-line diagnostic, and the three diagnostic kinds
/// stay distinguishable.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together the lexer, parser, evaluator, value types, and
/// the session dispatcher to provide a complete runtime for one-line
/// statements. It exposes the types a read-loop needs to drive a session.
pub mod interpreter;

/// Runs every line of a script through one session.
///
/// Lines are processed in order until the script ends or a line parses to
/// the termination statement, after which no further lines are read. All
/// narrative output and diagnostics go to the given sink.
///
/// # Errors
/// Returns an error only if writing to the sink fails; malformed lines are
/// reported as diagnostics and never end the run.
///
/// # Examples
/// ```
/// use soseol::{interpreter::parser::grammar::Grammar, run_script};
///
/// let mut out = Vec::new();
/// run_script("나는 그녀에게 말했다. 2 + 3 * 4", Grammar::symbolic(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "그녀는 숫자를 들었다: 14\n");
/// ```
pub fn run_script(source: &str, grammar: Grammar, out: impl Write) -> io::Result<()> {
    let mut session = Session::new(grammar, out);
    for line in source.lines() {
        if session.process_line(line)? == Outcome::Terminate {
            break;
        }
    }
    Ok(())
}
