use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            grammar::{
                Grammar, KW_COMPANION, KW_LISTENER, KW_PARTED, KW_PARTED_ALT, KW_SUBJECT, KW_TOLD,
            },
        },
    },
};

/// Parses a single statement, consuming the whole token sequence.
///
/// A statement may be one of:
/// - an output phrase (`나는 그녀에게 말했다 .` followed by an expression),
/// - a termination phrase (`나는 그녀와` followed by either termination
///   verb),
/// - an expression used as a statement,
/// - nothing at all (an empty line).
///
/// Parsing is attempted in that order; the first matching form is returned.
/// The reserved phrases are probed over a cloned lookahead, so a failed
/// probe consumes no input and the line falls through to the next form.
/// Leftover tokens after a complete statement are an error; the parser never
/// recovers within a line.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
/// - `grammar`: The operator notation in effect.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` if the tokens match no statement form, if an
/// expression inside a matched form is malformed, or if tokens remain after
/// a complete statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.peek().is_none() {
        return Ok(Statement::Empty);
    }

    if let Some(statement) = parse_output(tokens, grammar)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_termination(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens, grammar)?;
    expect_end(tokens)?;
    Ok(Statement::Expression(expr))
}

/// Parses an output statement.
///
/// The phrase is three fixed words and a closing dot, followed by the
/// expression whose result is narrated:
///
/// ```text
///     나는 그녀에게 말했다 . <expression>
/// ```
///
/// If the four phrase tokens are not all present, the function returns
/// `Ok(None)` without consuming input; the line is then tried as a bare
/// expression instead.
///
/// # Errors
/// Returns a `ParseError` if the phrase matches but the trailing expression
/// is malformed or followed by extra tokens.
fn parse_output<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if !(next_is_word(&mut lookahead, KW_SUBJECT)
         && next_is_word(&mut lookahead, KW_LISTENER)
         && next_is_word(&mut lookahead, KW_TOLD)
         && matches!(lookahead.next(), Some((Token::Dot, _))))
    {
        return Ok(None);
    }

    // Commit: the subject, listener, verb, and dot tokens.
    for _ in 0..4 {
        tokens.next();
    }

    let expr = parse_expression(tokens, grammar)?;
    expect_end(tokens)?;
    Ok(Some(Statement::Output(expr)))
}

/// Parses a termination statement.
///
/// The phrase is the fixed subject/companion pair followed by either of the
/// two termination verbs; both spellings are synonyms and carry identical
/// meaning:
///
/// ```text
///     나는 그녀와 헤어졌다
///     나는 그녀와 이별했다
/// ```
///
/// If the phrase is not present, returns `Ok(None)` without consuming input.
///
/// # Errors
/// Returns a `ParseError` if tokens follow the completed phrase.
fn parse_termination<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if !(next_is_word(&mut lookahead, KW_SUBJECT) && next_is_word(&mut lookahead, KW_COMPANION)) {
        return Ok(None);
    }
    let parted = matches!(lookahead.next(),
                          Some((Token::Identifier(word), _)) if word == KW_PARTED
                                                                || word == KW_PARTED_ALT);
    if !parted {
        return Ok(None);
    }

    // Commit: the subject, companion, and verb tokens.
    for _ in 0..3 {
        tokens.next();
    }

    expect_end(tokens)?;
    Ok(Some(Statement::Termination))
}

/// Returns `true` when the next token is the given reserved word.
fn next_is_word<'a, I>(lookahead: &mut Peekable<I>, word: &str) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(lookahead.next(), Some((Token::Identifier(w), _)) if w == word)
}

/// Requires that the token sequence is exhausted.
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None => Ok(()),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                       position: *position, })
        },
    }
}
