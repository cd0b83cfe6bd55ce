//! Quiz problems and the random generator that produces them.
//!
//! Every problem renders as `"{left} {op} {right} ="`. Operands are drawn so
//! that the answer is always an exact integer: subtraction is shown as
//! `sum - right` and division as `product / divisor`.

use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::evaluator::parse_expression;
use crate::{Operator, ParseFailure};

/// Range for addends, subtraction helpers and multiplication/division factors.
pub const WIDE_RANGE: RangeInclusive<i64> = 2..=100;

/// Range for the small multiplication factor and the division divisor.
pub const NARROW_RANGE: RangeInclusive<i64> = 2..=12;

/// An arithmetic problem shown to the player.
///
/// Immutable once built; the session replaces it rather than editing it.
/// Serializes as its display text, and deserializing re-parses that text so
/// the operands and the text always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Problem {
    left: i64,
    operator: Operator,
    right: i64,
    display_text: String,
}

impl Problem {
    /// Creates a problem and renders its display text.
    pub fn new(left: i64, operator: Operator, right: i64) -> Self {
        let display_text = format!("{} {} {} =", left, operator.symbol(), right);
        Self {
            left,
            operator,
            right,
            display_text,
        }
    }

    /// Left operand as displayed.
    pub fn left(&self) -> i64 {
        self.left
    }

    /// Operator as displayed.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Right operand as displayed.
    pub fn right(&self) -> i64 {
        self.right
    }

    /// Rendered text, e.g. `"8 * 9 ="`.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The exact answer, or `None` if the operands cannot be evaluated.
    pub fn answer(&self) -> Option<i64> {
        self.operator.apply(self.left, self.right)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text)
    }
}

impl FromStr for Problem {
    type Err = ParseFailure;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (left, operator, right) = parse_expression(text)?;
        Ok(Self::new(left, operator, right))
    }
}

impl TryFrom<String> for Problem {
    type Error = ParseFailure;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Problem> for String {
    fn from(problem: Problem) -> Self {
        problem.display_text
    }
}

/// Anything the session can ask for the next problem.
pub trait ProblemSource {
    /// Produces a fresh problem. Never fails.
    fn next_problem(&mut self) -> Problem;
}

impl<P: ProblemSource + ?Sized> ProblemSource for Box<P> {
    fn next_problem(&mut self) -> Problem {
        (**self).next_problem()
    }
}

/// Uniformly random problems over the four operators.
#[derive(Debug, Clone)]
pub struct RandomProblems<R = StdRng> {
    rng: R,
}

impl RandomProblems<StdRng> {
    /// Creates a generator seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible generator from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomProblems<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomProblems<R> {
    /// Wraps an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick_operator(&mut self) -> Operator {
        Operator::iter()
            .choose(&mut self.rng)
            .unwrap_or(Operator::Add)
    }

    /// Generates one problem.
    pub fn generate(&mut self) -> Problem {
        let operator = self.pick_operator();
        let problem = match operator {
            Operator::Add => {
                let left = self.rng.gen_range(WIDE_RANGE);
                let right = self.rng.gen_range(WIDE_RANGE);
                Problem::new(left, operator, right)
            }
            Operator::Subtract => {
                // Shown as `sum - right`; the answer is the drawn left operand.
                let left = self.rng.gen_range(WIDE_RANGE);
                let right = self.rng.gen_range(WIDE_RANGE);
                Problem::new(left + right, operator, right)
            }
            Operator::Multiply => {
                let left = self.rng.gen_range(NARROW_RANGE);
                let right = self.rng.gen_range(WIDE_RANGE);
                Problem::new(left, operator, right)
            }
            Operator::Divide => {
                // Shown as `product / divisor`; the answer is the quotient.
                let divisor = self.rng.gen_range(NARROW_RANGE);
                let quotient = self.rng.gen_range(WIDE_RANGE);
                Problem::new(divisor * quotient, operator, divisor)
            }
        };
        debug!(problem = %problem, "Generated problem");
        problem
    }
}

impl<R: Rng> ProblemSource for RandomProblems<R> {
    fn next_problem(&mut self) -> Problem {
        self.generate()
    }
}
