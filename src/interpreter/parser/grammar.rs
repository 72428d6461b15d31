use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// `나는`: the subject opening both reserved phrases.
pub const KW_SUBJECT: &str = "나는";
/// `그녀에게`: the listener of the output phrase.
pub const KW_LISTENER: &str = "그녀에게";
/// `말했다`: the verb of the output phrase.
pub const KW_TOLD: &str = "말했다";
/// `그녀와`: the companion of the termination phrase.
pub const KW_COMPANION: &str = "그녀와";
/// `헤어졌다`: one of the two termination verbs.
pub const KW_PARTED: &str = "헤어졌다";
/// `이별했다`: the other termination verb, a synonym of [`KW_PARTED`].
pub const KW_PARTED_ALT: &str = "이별했다";

/// `더하기`: the worded spelling of addition.
pub const KW_ADD: &str = "더하기";
/// `빼기`: the worded spelling of subtraction.
pub const KW_SUB: &str = "빼기";
/// `곱하기`: the worded spelling of multiplication.
pub const KW_MUL: &str = "곱하기";
/// `나누기`: the worded spelling of division.
pub const KW_DIV: &str = "나누기";

/// How the four operators are spelled in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Operators are symbol runs: `+`, `-`, `*`, `/`.
    Symbolic,
    /// Operators are reserved words: `더하기`, `빼기`, `곱하기`, `나누기`.
    Worded,
}

/// The grammar of one session.
///
/// A `Grammar` is immutable, built once, and passed by reference into every
/// per-line parse call. It carries the operator notation; the reserved
/// statement phrases are shared by both notations.
///
/// Both notations produce identical syntax trees: only the surface spelling
/// of the operators differs, never the tree shape or the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    notation: Notation,
}

impl Grammar {
    /// A grammar whose operators are the symbols `+ - * /`.
    #[must_use]
    pub const fn symbolic() -> Self {
        Self { notation: Notation::Symbolic }
    }

    /// A grammar whose operators are the Hangul operator words.
    #[must_use]
    pub const fn worded() -> Self {
        Self { notation: Notation::Worded }
    }

    /// Matches a token against the expression-tier operators (`+`, `-`).
    ///
    /// Returns `Ok(None)` when the token does not bind at this tier; the
    /// caller's climbing loop then stops extending.
    ///
    /// # Errors
    /// In the symbolic notation, a symbol run that names no operator at all
    /// (such as `--`) is rejected here with `ParseError::UnknownOperator`;
    /// it is never split into smaller runs.
    pub fn expression_operator(&self, token: &Token, position: usize) -> ParseResult<Option<Operator>> {
        match self.operator(token, position)? {
            Some(op @ (Operator::Add | Operator::Sub)) => Ok(Some(op)),
            _ => Ok(None),
        }
    }

    /// Matches a token against the term-tier operators (`*`, `/`).
    ///
    /// Returns `Ok(None)` when the token does not bind at this tier, which
    /// includes expression-tier operators left for the enclosing loop.
    ///
    /// # Errors
    /// Same as [`Grammar::expression_operator`].
    pub fn term_operator(&self, token: &Token, position: usize) -> ParseResult<Option<Operator>> {
        match self.operator(token, position)? {
            Some(op @ (Operator::Mul | Operator::Div)) => Ok(Some(op)),
            _ => Ok(None),
        }
    }

    /// Maps a token onto an operator regardless of tier.
    fn operator(&self, token: &Token, position: usize) -> ParseResult<Option<Operator>> {
        match (self.notation, token) {
            (Notation::Symbolic, Token::Operator(symbol)) => {
                symbol_operator(symbol, position).map(Some)
            },
            (Notation::Worded, Token::Identifier(word)) => Ok(word_operator(word)),
            _ => Ok(None),
        }
    }
}

/// Maps a symbol run onto its operator.
///
/// The run was consumed greedily by the lexer; here it must be exactly one
/// of the four operator symbols, or the whole run is rejected.
fn symbol_operator(symbol: &str, position: usize) -> ParseResult<Operator> {
    match symbol {
        "+" => Ok(Operator::Add),
        "-" => Ok(Operator::Sub),
        "*" => Ok(Operator::Mul),
        "/" => Ok(Operator::Div),
        _ => {
            Err(ParseError::UnknownOperator { symbol:   symbol.to_string(),
                                              position, })
        },
    }
}

/// Maps a reserved word onto its operator, if it names one.
fn word_operator(word: &str) -> Option<Operator> {
    match word {
        KW_ADD => Some(Operator::Add),
        KW_SUB => Some(Operator::Sub),
        KW_MUL => Some(Operator::Mul),
        KW_DIV => Some(Operator::Div),
        _ => None,
    }
}
