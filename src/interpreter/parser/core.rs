use std::iter::Peekable;

use crate::{
    ast::{Expression, Factor, Term, Value},
    error::ParseError,
    interpreter::{lexer::Token, parser::grammar::Grammar},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Precedence is climbed
/// iteratively: one term is parsed, then every following expression-tier
/// operator extends it with another `(operator, term)` pair. The pair list
/// encodes left-to-right application order, so no re-association happens
/// later.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `grammar`: The operator notation in effect.
///
/// # Returns
/// The parsed [`Expression`] node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Expression>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_term(tokens, grammar)?;
    let mut rest = Vec::new();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = grammar.expression_operator(token, *position)?
        {
            tokens.next();
            let right = parse_term(tokens, grammar)?;
            rest.push((op, right));
            continue;
        }
        break;
    }
    Ok(Expression { left, rest })
}

/// Parses a term.
///
/// Identical climbing shape to [`parse_expression`], one tier down: a factor
/// extended by term-tier operators. Because this loop consumes `*` and `/`
/// before returning, the expression-tier loop above only ever sees `+`, `-`,
/// or the end of the expression.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `grammar`: The operator notation in effect.
///
/// # Returns
/// The parsed [`Term`] node.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Term>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_factor(tokens, grammar)?;
    let mut rest = Vec::new();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = grammar.term_operator(token, *position)?
        {
            tokens.next();
            let right = parse_factor(tokens, grammar)?;
            rest.push((op, right));
            continue;
        }
        break;
    }
    Ok(Term { left, rest })
}

/// Parses a factor, which wraps exactly one value.
///
/// Grammar: `factor := value`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Factor>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = parse_value(tokens, grammar)?;
    Ok(Factor { value })
}

/// Parses an atomic value.
///
/// A value is a numeric literal, a text literal, or a parenthesized
/// sub-expression, the recursive case and sole source of tree depth.
///
/// Grammar:
/// ```text
///     value := NUMBER
///            | TEXT
///            | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a value.
/// - `grammar`: The operator notation in effect.
///
/// # Returns
/// The parsed [`Value`] or a `ParseError` on failure.
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Real(n) | Token::Integer(n), _) => {
            let n = *n;
            tokens.next();
            Ok(Value::Number(n))
        },
        (Token::Text(raw), _) => {
            let raw = raw.clone();
            tokens.next();
            Ok(Value::Text(raw))
        },
        (Token::LParen, _) => parse_grouping(tokens, grammar),
        (tok, position) => {
            Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                              position: *position, })
        },
    }
}

/// Parses a parenthesized sub-expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, recurses into the full
/// expression rule, and then requires a closing `)`. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, grammar: &Grammar) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens, grammar)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Value::Grouping(Box::new(expr))),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
