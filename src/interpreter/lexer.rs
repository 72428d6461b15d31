use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in one line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Rule order resolves ambiguity by longest match: quoted text is matched
/// before any numeric or symbol rule, floats before plain integers, and a
/// symbol run is consumed greedily as one token. The reserved-word script
/// range never overlaps numbers or quoted text.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Quoted text, such as `"안녕"`. An escaped `\"` is the only quote
    /// permitted inside; the raw slice, quotes included, is kept in the
    /// token.
    #[regex(r#""(\\"|[^"])*""#, |lex| lex.slice().to_string())]
    Text(String),
    /// Float literal tokens, such as `3.14` or `.5`. The dot and the
    /// fractional digits are mandatory, so `3.` is an integer followed by a
    /// [`Token::Dot`].
    #[regex(r"[0-9]*\.[0-9]+", parse_number)]
    Real(f64),
    /// Integer literal tokens, such as `42`. The language has one numeric
    /// domain, so the value is carried as `f64` like a float literal.
    #[regex(r"[0-9]+", parse_number)]
    Integer(f64),
    /// Reserved-word tokens drawn from the Hangul script range, such as
    /// `나는` or `더하기`. The parser decides which words are meaningful.
    #[regex(r"[ㄱ-ㅎ가-힣ㅏ-ㅣ]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A run of arithmetic symbols, consumed greedily as one token.
    /// Multi-symbol runs such as `--` are legal tokens here; whether a run
    /// names an operator is decided at parse time.
    #[regex(r"[+\-*/]+", |lex| lex.slice().to_string())]
    Operator(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`, the delimiter closing the output phrase.
    #[token(".")]
    Dot,

    /// A run of line terminators. Recognized as its own category, then
    /// elided from the emitted token sequence.
    #[regex(r"\n+")]
    Eol,
    /// Spaces and tabs.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// Both integer and float spellings are parsed into the language's single
/// `f64` numeric domain.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts one line of input into an ordered token sequence.
///
/// Each token is paired with its byte position in the line. Whitespace and
/// line-terminator runs are recognized but elided. A failed lex yields a
/// [`LexError`] identifying the offending slice; no token sequence from a
/// failed lex ever reaches the parser.
///
/// # Parameters
/// - `line`: One line of input text.
///
/// # Returns
/// The token sequence as `(Token, position)` pairs, or a `LexError`.
///
/// # Errors
/// Returns `LexError::UnrecognizedInput` if any byte sequence in the line
/// matches no token rule.
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Eol) => {},
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                return Err(LexError::UnrecognizedInput { lexeme:   lexer.slice().to_string(),
                                                         position: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
