use std::io::{self, Write};

use tracing::debug;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::Evaluator,
        lexer::tokenize,
        parser::{grammar::Grammar, statement::parse_statement},
        value::RuntimeValue,
    },
};

/// Narrative prefix for numeric replies.
const NUMBER_REPLY: &str = "그녀는 숫자를 들었다: ";
/// Narrative prefix for text replies.
const TEXT_REPLY: &str = "그녀는 내 말을 들었다: ";

/// What the caller should do after a processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading lines.
    Continue,
    /// Stop reading; the session ended on purpose.
    Terminate,
}

/// One interactive session: grammar, evaluator, and output sink.
///
/// The session is the statement dispatcher. It receives already-separated
/// lines from its caller, runs each through lex, parse, and evaluation, and
/// writes at most one narrative line plus any diagnostics to its sink. All
/// faults are local to one line; the only way a session ends is a
/// termination statement (reported through [`Outcome::Terminate`]) or the
/// caller running out of input.
pub struct Session<W> {
    grammar:   Grammar,
    evaluator: Evaluator,
    out:       W,
}

impl<W: Write> Session<W> {
    /// Creates a session over the given grammar and output sink.
    pub fn new(grammar: Grammar, out: W) -> Self {
        Self { grammar,
               evaluator: Evaluator::new(),
               out }
    }

    /// Processes one line of input.
    ///
    /// The line is lexed, parsed into exactly one statement, and
    /// dispatched. Lex and parse failures are written to the sink as
    /// diagnostics and the line is dropped; the session stays usable. The
    /// per-line token sequence and syntax tree are discarded before this
    /// function returns.
    ///
    /// # Parameters
    /// - `line`: One line of input, without its terminator.
    ///
    /// # Returns
    /// The [`Outcome`] telling the caller whether to keep reading.
    ///
    /// # Errors
    /// Returns an error only if writing to the sink fails.
    pub fn process_line(&mut self, line: &str) -> io::Result<Outcome> {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(Outcome::Continue);
            },
        };

        let mut iter = tokens.iter().peekable();
        let statement = match parse_statement(&mut iter, &self.grammar) {
            Ok(statement) => statement,
            Err(e) => {
                debug!(?tokens, "line failed to parse");
                writeln!(self.out, "{e}")?;
                return Ok(Outcome::Continue);
            },
        };

        debug!(?statement, "dispatching statement");
        self.dispatch(&statement)
    }

    /// Performs the single action a statement calls for.
    fn dispatch(&mut self, statement: &Statement) -> io::Result<Outcome> {
        match statement {
            Statement::Empty => Ok(Outcome::Continue),
            Statement::Termination => Ok(Outcome::Terminate),
            Statement::Expression(expr) => {
                let _ = self.evaluator.eval_expression(expr);
                self.report_faults()?;
                Ok(Outcome::Continue)
            },
            Statement::Output(expr) => {
                let result = self.evaluator.eval_expression(expr);
                self.report_faults()?;
                match result {
                    Some(RuntimeValue::Number(n)) => writeln!(self.out, "{NUMBER_REPLY}{n}")?,
                    Some(RuntimeValue::Text(s)) => writeln!(self.out, "{TEXT_REPLY}{s}")?,
                    // A faulted result narrates nothing; its diagnostics
                    // were already written.
                    None => {},
                }
                Ok(Outcome::Continue)
            },
        }
    }

    /// Writes one diagnostic line per fault raised by the last statement.
    fn report_faults(&mut self) -> io::Result<()> {
        for fault in self.evaluator.take_faults() {
            writeln!(self.out, "{fault}")?;
        }
        Ok(())
    }
}
