//! Answer evaluation.
//!
//! The expected answer is re-derived from the problem's display text, so the
//! text format `"{a} {op} {b} ="` is the contract between generator and
//! evaluator.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::{Operator, Problem};

/// Outcome of checking a complete integer answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The answer matches.
    Correct,
    /// The answer is a valid integer but wrong.
    Incorrect {
        /// The answer the problem expected.
        expected: i64,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Correct`].
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// No verdict could be reached.
///
/// Callers treat every variant as "not answered yet" and wait for more input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseFailure {
    /// The candidate answer is not an integer (yet).
    #[display("Answer {:?} is not an integer", input)]
    InvalidAnswer {
        /// The text that failed to parse.
        input: String,
    },

    /// The problem text does not have the `a op b =` shape.
    #[display("Malformed problem text {:?}", text)]
    MalformedProblem {
        /// The offending problem text.
        text: String,
    },

    /// The expression overflows or divides by zero.
    #[display("Problem {:?} has no integer answer", text)]
    Unevaluable {
        /// The offending problem text.
        text: String,
    },
}

impl std::error::Error for ParseFailure {}

/// Splits display text into its operands and operator.
///
/// The text must be exactly four tokens separated by single spaces:
/// operand, operator symbol, operand, `=`.
pub fn parse_expression(text: &str) -> Result<(i64, Operator, i64), ParseFailure> {
    let malformed = || ParseFailure::MalformedProblem {
        text: text.to_string(),
    };

    let tokens: Vec<&str> = text.split(' ').collect();
    let [left, symbol, right, "="] = tokens.as_slice() else {
        return Err(malformed());
    };

    let left = left.parse::<i64>().map_err(|_| malformed())?;
    let operator = Operator::from_symbol(symbol).ok_or_else(malformed)?;
    let right = right.parse::<i64>().map_err(|_| malformed())?;

    Ok((left, operator, right))
}

/// Checks a candidate answer against a problem.
///
/// The candidate is parsed first, so partial input like `"-"` or `""` is an
/// [`ParseFailure::InvalidAnswer`] regardless of the problem.
#[instrument(skip(problem), fields(problem = %problem))]
pub fn evaluate(problem: &Problem, candidate: &str) -> Result<Verdict, ParseFailure> {
    let answer = candidate
        .parse::<i64>()
        .map_err(|_| ParseFailure::InvalidAnswer {
            input: candidate.to_string(),
        })?;

    let text = problem.display_text();
    let (left, operator, right) = parse_expression(text)?;
    let expected = operator
        .apply(left, right)
        .ok_or_else(|| ParseFailure::Unevaluable {
            text: text.to_string(),
        })?;

    let verdict = if answer == expected {
        Verdict::Correct
    } else {
        Verdict::Incorrect { expected }
    };
    trace!(answer, ?verdict, "Evaluated answer");
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expression_accepts_negative_operands() {
        assert_eq!(
            parse_expression("-4 * 3 ="),
            Ok((-4, Operator::Multiply, 3))
        );
    }

    #[test]
    fn test_parse_expression_requires_single_spaces() {
        assert!(parse_expression("4  * 3 =").is_err());
        assert!(parse_expression(" 4 * 3 =").is_err());
        assert!(parse_expression("4 * 3 = ").is_err());
    }

    #[test]
    fn test_parse_expression_requires_trailing_equals() {
        assert!(parse_expression("4 * 3 ?").is_err());
        assert!(parse_expression("4 * 3").is_err());
    }
}
