//! Arithmetic operators used by quiz problems.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the four arithmetic operations a problem can ask about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Integer division (`/`), truncating toward zero.
    Divide,
}

impl Operator {
    /// Returns the symbol used in a problem's display text.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Looks up the operator for an exact display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operator::iter().find(|op| op.symbol() == symbol)
    }

    /// Evaluates `left op right` with checked integer arithmetic.
    ///
    /// Returns `None` on overflow or division by zero. Division truncates
    /// toward zero.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => left.checked_div(right),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip_through_lookup() {
        for op in Operator::iter() {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(Operator::from_symbol("x"), None);
        assert_eq!(Operator::from_symbol("+="), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Operator::Divide.apply(7, 2), Some(3));
        assert_eq!(Operator::Divide.apply(-7, 2), Some(-3));
    }

    #[test]
    fn test_checked_failures() {
        assert_eq!(Operator::Divide.apply(5, 0), None);
        assert_eq!(Operator::Add.apply(i64::MAX, 1), None);
        assert_eq!(Operator::Multiply.apply(i64::MAX, 2), None);
    }
}
