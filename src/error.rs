/// Lexing and parsing errors.
///
/// Defines all error types that can occur before evaluation: input that
/// matches no token rule, and token sequences that match no statement form.
/// Both carry the byte position of the offending input within the line.
pub mod parse_error;
/// Runtime faults.
///
/// Contains the fault types that can be raised while evaluating a syntax
/// tree. Faults are recoverable: they are reported as diagnostics and never
/// end the session.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeFault;
