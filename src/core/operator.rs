//! The four binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
///
/// Each operator has one canonical display symbol (`+ - x ÷`). The keyboard
/// spellings `*` and `/` are accepted as aliases when parsing.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
/// assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
/// assert_eq!(Operator::Divide.symbol(), "÷");
/// assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Parse a button value or key token into an operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "x" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Canonical symbol shown on the top display line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two parsed operands (pure).
    ///
    /// Division follows IEEE 754; the literal-zero divisor is intercepted
    /// before this is called.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
