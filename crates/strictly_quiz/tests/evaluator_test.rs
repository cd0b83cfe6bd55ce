//! Tests for answer evaluation.

use strictly_quiz::{Operator, ParseFailure, Problem, Verdict, evaluate};

fn problem(text: &str) -> Problem {
    text.parse().expect("Valid problem text")
}

#[test]
fn test_correct_addition() {
    let verdict = evaluate(&problem("15 + 27 ="), "42");
    assert_eq!(verdict, Ok(Verdict::Correct));
}

#[test]
fn test_each_operator() {
    assert_eq!(evaluate(&problem("57 - 30 ="), "27"), Ok(Verdict::Correct));
    assert_eq!(evaluate(&problem("8 * 9 ="), "72"), Ok(Verdict::Correct));
    assert_eq!(evaluate(&problem("84 / 12 ="), "7"), Ok(Verdict::Correct));
}

#[test]
fn test_wrong_answer_reports_expected() {
    let verdict = evaluate(&problem("8 * 9 ="), "7").expect("Should evaluate");
    assert_eq!(verdict, Verdict::Incorrect { expected: 72 });
    assert!(!verdict.is_correct());
}

#[test]
fn test_partial_prefix_is_incorrect_not_error() {
    // Typing "72" arrives as "7" first.
    let verdict = evaluate(&problem("8 * 9 ="), "7");
    assert!(matches!(verdict, Ok(Verdict::Incorrect { .. })));
}

#[test]
fn test_non_numeric_answer_is_parse_failure() {
    for input in ["ab", "", "-", "7a", " 72", "72 ", "7.5"] {
        let result = evaluate(&problem("8 * 9 ="), input);
        assert!(
            matches!(result, Err(ParseFailure::InvalidAnswer { .. })),
            "{:?} gave {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_signed_answers_parse() {
    assert_eq!(evaluate(&problem("8 * 9 ="), "+72"), Ok(Verdict::Correct));
    assert_eq!(evaluate(&problem("3 - 5 ="), "-2"), Ok(Verdict::Correct));
}

#[test]
fn test_malformed_problem_text() {
    for text in ["8 * 9", "8 * 9 = 72", "8 x 9 =", "eight * 9 =", "8  * 9 ="] {
        assert!(
            matches!(
                text.parse::<Problem>(),
                Err(ParseFailure::MalformedProblem { .. })
            ),
            "{:?}",
            text
        );
    }
}

#[test]
fn test_division_by_zero_is_unevaluable() {
    let problem = Problem::new(5, Operator::Divide, 0);
    assert_eq!(
        evaluate(&problem, "0"),
        Err(ParseFailure::Unevaluable {
            text: "5 / 0 =".to_string()
        })
    );
}

#[test]
fn test_answer_parsed_before_problem() {
    let problem = Problem::new(5, Operator::Divide, 0);
    assert!(matches!(
        evaluate(&problem, "x"),
        Err(ParseFailure::InvalidAnswer { .. })
    ));
}

#[test]
fn test_parse_failure_messages() {
    let failure = evaluate(&problem("8 * 9 ="), "ab").expect_err("Should fail");
    assert!(failure.to_string().contains("not an integer"));
}
