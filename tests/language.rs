use soseol::{
    interpreter::{
        evaluator::Evaluator,
        lexer::tokenize,
        parser::{core::parse_expression, grammar::Grammar},
        session::{Outcome, Session},
    },
    run_script,
};

/// Feeds lines to one session and returns the per-line outcomes plus
/// everything written to the sink.
fn session_output(lines: &[&str], grammar: Grammar) -> (Vec<Outcome>, String) {
    let mut out = Vec::new();
    let mut session = Session::new(grammar, &mut out);

    let mut outcomes = Vec::new();
    for line in lines {
        outcomes.push(session.process_line(line).expect("write to sink failed"));
    }
    drop(session);

    (outcomes, String::from_utf8(out).expect("sink holds valid utf-8"))
}

/// Wraps one expression in the output phrase and returns the session output.
fn tell(expr: &str) -> String {
    let line = format!("나는 그녀에게 말했다. {expr}");
    let (_, out) = session_output(&[&line], Grammar::symbolic());
    out
}

fn number_reply(value: &str) -> String {
    format!("그녀는 숫자를 들었다: {value}\n")
}

fn text_reply(value: &str) -> String {
    format!("그녀는 내 말을 들었다: {value}\n")
}

#[test]
fn operators_match_float_semantics() {
    assert_eq!(tell("8 + 3"), number_reply("11"));
    assert_eq!(tell("8 - 3"), number_reply("5"));
    assert_eq!(tell("8 * 3"), number_reply("24"));
    assert_eq!(tell("8 / 2"), number_reply("4"));

    // The parsed results are the plain f64 results of the same operators.
    assert_eq!(tell("0.1 + 0.2"), number_reply(&(0.1_f64 + 0.2_f64).to_string()));
    assert_eq!(tell("7 / 3"), number_reply(&(7.0_f64 / 3.0_f64).to_string()));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tell("2 + 3 * 4"), number_reply("14"));
    assert_eq!(tell("(2 + 3) * 4"), number_reply("20"));
}

#[test]
fn chained_operators_are_left_associative() {
    assert_eq!(tell("8 - 3 - 2"), number_reply("3"));
    assert_eq!(tell("16 / 4 / 2"), number_reply("2"));
}

#[test]
fn text_literal_round_trips_without_quotes() {
    assert_eq!(tell("\"hi\""), text_reply("hi"));
}

#[test]
fn escaped_quote_survives_untouched() {
    // Only the delimiting quotes are stripped; the interior escape stays.
    assert_eq!(tell("\"a\\\"b\""), text_reply("a\\\"b"));
}

#[test]
fn float_spellings_share_the_numeric_domain() {
    assert_eq!(tell(".5 + 2.25"), number_reply("2.75"));
    assert_eq!(tell("1.0 + 2"), number_reply("3"));
}

#[test]
fn division_by_zero_is_not_a_fault() {
    assert_eq!(tell("1 / 0"), number_reply("inf"));
}

#[test]
fn type_fault_is_reported_and_recoverable() {
    let (outcomes, out) = session_output(&["\"hi\" + 1", "나는 그녀에게 말했다. 2 + 2"],
                                         Grammar::symbolic());

    assert_eq!(outcomes, vec![Outcome::Continue, Outcome::Continue]);
    assert!(out.contains("Type fault"));
    assert!(out.contains(&number_reply("4")));
}

#[test]
fn type_faults_cascade_through_chained_operators() {
    let (_, out) = session_output(&["\"a\" + 1 + 2"], Grammar::symbolic());

    assert_eq!(out.matches("Type fault").count(), 2);
}

#[test]
fn faulted_output_statement_narrates_nothing() {
    let (_, out) = session_output(&["나는 그녀에게 말했다. \"a\" + 1"], Grammar::symbolic());

    assert_eq!(out.matches("Type fault").count(), 1);
    assert!(!out.contains("그녀는"));
}

#[test]
fn narrative_prefixes_distinguish_numbers_from_text() {
    let number = tell("42");
    let text = tell("\"42\"");

    assert_eq!(number, number_reply("42"));
    assert_eq!(text, text_reply("42"));
    assert_ne!(number, text);
}

#[test]
fn both_termination_verbs_terminate() {
    let (outcomes, out) = session_output(&["나는 그녀와 헤어졌다"], Grammar::symbolic());
    assert_eq!(outcomes, vec![Outcome::Terminate]);
    assert!(out.is_empty());

    let (outcomes, out) = session_output(&["나는 그녀와 이별했다"], Grammar::symbolic());
    assert_eq!(outcomes, vec![Outcome::Terminate]);
    assert!(out.is_empty());
}

#[test]
fn scripted_session_stops_at_termination() {
    let script = "나는 그녀에게 말했다. 1\n나는 그녀와 헤어졌다\n나는 그녀에게 말했다. 2";
    let mut out = Vec::new();
    run_script(script, Grammar::symbolic(), &mut out).expect("write to sink failed");
    let out = String::from_utf8(out).expect("sink holds valid utf-8");

    assert!(out.contains(&number_reply("1")));
    assert!(!out.contains(&number_reply("2")));
}

#[test]
fn empty_lines_are_silent_no_ops() {
    let (outcomes, out) = session_output(&["", "   ", "\t"], Grammar::symbolic());

    assert_eq!(outcomes,
               vec![Outcome::Continue, Outcome::Continue, Outcome::Continue]);
    assert!(out.is_empty());
}

#[test]
fn expression_statement_discards_its_result() {
    let (outcomes, out) = session_output(&["2 + 2"], Grammar::symbolic());

    assert_eq!(outcomes, vec![Outcome::Continue]);
    assert!(out.is_empty());
}

#[test]
fn unbalanced_parenthesis_is_a_parse_error() {
    let (outcomes, out) = session_output(&["(2 + 3"], Grammar::symbolic());

    assert_eq!(outcomes, vec![Outcome::Continue]);
    assert!(out.contains("Expected closing parenthesis"));
    assert!(!out.contains("그녀는"));
}

#[test]
fn multi_symbol_runs_are_rejected_whole_at_parse_time() {
    let (_, out) = session_output(&["2 -- 3"], Grammar::symbolic());

    assert!(out.contains("Unknown operator '--'"));
    assert!(!out.contains("Lex error"));
}

#[test]
fn bare_trailing_dot_is_not_a_float() {
    let (_, out) = session_output(&["3."], Grammar::symbolic());

    assert!(out.contains("Extra tokens after statement"));
}

#[test]
fn input_outside_every_token_rule_fails_the_lex() {
    let (outcomes, out) = session_output(&["2 $ 3", "abc"], Grammar::symbolic());

    assert_eq!(outcomes, vec![Outcome::Continue, Outcome::Continue]);
    assert_eq!(out.matches("Unrecognized input").count(), 2);
}

#[test]
fn incomplete_phrase_falls_through_to_a_parse_error() {
    // The output phrase without its dot is no phrase at all, and the
    // reserved words are no expression either.
    let (_, out) = session_output(&["나는 그녀에게 말했다 5"], Grammar::symbolic());
    assert!(out.contains("Parse error"));

    let (outcomes, _) = session_output(&["나는 그녀와 말했다"], Grammar::symbolic());
    assert_eq!(outcomes, vec![Outcome::Continue]);
}

#[test]
fn worded_notation_shares_precedence_and_results() {
    let line = "나는 그녀에게 말했다. 2 더하기 3 곱하기 4";
    let (_, out) = session_output(&[line], Grammar::worded());
    assert_eq!(out, number_reply("14"));

    let line = "나는 그녀에게 말했다. 10 빼기 3 빼기 2";
    let (_, out) = session_output(&[line], Grammar::worded());
    assert_eq!(out, number_reply("5"));

    let line = "나는 그녀에게 말했다. (2 더하기 3) 나누기 5";
    let (_, out) = session_output(&[line], Grammar::worded());
    assert_eq!(out, number_reply("1"));
}

#[test]
fn symbols_are_not_operators_in_the_worded_notation() {
    let (_, out) = session_output(&["2 + 3"], Grammar::worded());

    assert!(out.contains("Extra tokens after statement"));
}

#[test]
fn no_internal_faults_for_grammar_operators() {
    let grammar = Grammar::symbolic();
    let mut evaluator = Evaluator::new();

    for src in ["1 + 2", "1 - 2", "1 * 2", "1 / 2", "1 + 2 * 3 - 4 / (5 - 3)"] {
        let tokens = tokenize(src).expect("line lexes");
        let mut iter = tokens.iter().peekable();
        let expr = parse_expression(&mut iter, &grammar).expect("line parses");

        assert!(evaluator.eval_expression(&expr).is_some());
        assert!(evaluator.take_faults().is_empty());
    }
}

#[test]
fn type_faults_are_never_internal() {
    let grammar = Grammar::symbolic();
    let mut evaluator = Evaluator::new();

    let tokens = tokenize("\"a\" * 2").expect("line lexes");
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, &grammar).expect("line parses");

    assert!(evaluator.eval_expression(&expr).is_none());
    let faults = evaluator.take_faults();
    assert!(!faults.is_empty());
    assert!(faults.iter().all(|fault| !fault.is_internal()));
}
