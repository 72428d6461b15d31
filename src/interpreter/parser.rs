/// Core expression parsing.
///
/// Contains the precedence-climbing entry points for expressions, terms,
/// factors, and values, together with the shared `ParseResult` alias.
pub mod core;

/// The grammar object.
///
/// Defines the reserved-phrase vocabulary and the two operator notations,
/// and maps tokens onto operators one precedence tier at a time.
pub mod grammar;

/// Statement parsing.
///
/// Classifies one token sequence into exactly one statement form: output
/// phrase, termination phrase, bare expression, or empty line.
pub mod statement;
