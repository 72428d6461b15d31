#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a failure to recognize part of an input line as a token.
///
/// A line that fails to lex produces no token sequence and is never handed to
/// the parser; the session reports the error and moves on to the next line.
pub enum LexError {
    /// A byte sequence matched no token rule.
    UnrecognizedInput {
        /// The input slice that matched nothing.
        lexeme:   String,
        /// Byte position of the slice within the line.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { lexeme, position } => {
                write!(f, "Lex error at byte {position}: Unrecognized input {lexeme:?}.")
            },
        }
    }
}

impl std::error::Error for LexError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// The parser performs no error recovery within a line: a malformed line
/// produces no statement at all.
pub enum ParseError {
    /// Found a token that fits no statement form at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte position of the token within the line.
        position: usize,
    },
    /// Reached the end of the line unexpectedly.
    UnexpectedEndOfInput {
        /// Byte position where more input was expected.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte position of the opening parenthesis.
        position: usize,
    },
    /// A symbol run is not exactly one of the four operators.
    /// Runs such as `--` lex as a single token and are rejected here, whole.
    UnknownOperator {
        /// The offending symbol run.
        symbol:   String,
        /// Byte position of the run within the line.
        position: usize,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte position of the token within the line.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Parse error at byte {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Parse error at byte {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Parse error at byte {position}: Expected closing parenthesis ')' but none found."),

            Self::UnknownOperator { symbol, position } => {
                write!(f, "Parse error at byte {position}: Unknown operator '{symbol}'.")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Parse error at byte {position}: Extra tokens after statement. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
