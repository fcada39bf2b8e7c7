//! Calculator state and its pure transitions.
//!
//! Every transition consumes a state and returns the next one. Nothing here
//! touches globals or performs I/O, so any state can be built up and
//! inspected in isolation.

use super::number::{format_number, normalize_entry, parse_operand};
use super::operator::Operator;
use super::rules::Rules;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the calculator's in-memory state.
///
/// Operands are held as text. An empty string means the operand is unset.
/// The running total (`first_operand`) may also hold the divide-by-zero
/// message, in which case `divide_by_zero` is raised until the next render.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Operator, Rules};
///
/// let rules = Rules::default();
/// let state = CalculatorState::new()
///     .append_digit('3', &rules)
///     .set_operator(Operator::Add, &rules)
///     .append_digit('4', &rules)
///     .evaluate(&rules);
///
/// assert_eq!(state.first_operand(), "7");
/// assert_eq!(state.operator(), None);
/// assert_eq!(state.current_operand(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    first_operand: String,
    operator: Option<Operator>,
    current_operand: String,
    divide_by_zero: bool,
}

/// The two display lines derived from a state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Running total followed by the active operator, if any.
    pub top: String,
    /// Operand being typed.
    pub bottom: String,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.top)?;
        write!(f, "{}", self.bottom)
    }
}

impl CalculatorState {
    /// Empty state: no operands, no operator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Whether a divide-by-zero message is waiting to be rendered once.
    pub fn is_divide_by_zero(&self) -> bool {
        self.divide_by_zero
    }

    /// True when no operand or operator is set.
    pub fn is_empty(&self) -> bool {
        self.first_operand.is_empty() && self.operator.is_none() && self.current_operand.is_empty()
    }

    /// Append a digit to the operand being typed.
    ///
    /// A lone `"0"` is replaced rather than extended, and an operand that
    /// already reached `rules.max_entry_len` restarts with `digit`.
    pub fn append_digit(mut self, digit: char, rules: &Rules) -> Self {
        if self.current_operand == "0"
            || self.current_operand.chars().count() >= rules.max_entry_len
        {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit);
        }
        self
    }

    /// Append a decimal point unless the operand already has one.
    pub fn append_decimal(mut self) -> Self {
        if !self.current_operand.contains('.') {
            self.current_operand.push('.');
        }
        self
    }

    /// Select the operator for the next computation.
    ///
    /// The typed operand is normalized first. With no running total it
    /// becomes the running total; with both operands present the pending
    /// computation is folded into the running total before `op` takes over.
    pub fn set_operator(mut self, op: Operator, rules: &Rules) -> Self {
        if !self.current_operand.is_empty() {
            self.current_operand = normalize_entry(&self.current_operand);
        }

        if self.first_operand.is_empty() {
            self.first_operand = std::mem::take(&mut self.current_operand);
        }

        if !self.first_operand.is_empty() && !self.current_operand.is_empty() {
            self = self.evaluate(rules);
        }

        self.operator = Some(op);
        self
    }

    /// Compute `first_operand <operator> current_operand` into the running
    /// total.
    ///
    /// No-op unless both operands are set. A divisor that is literally `"0"`
    /// stores the divide-by-zero message instead of a number. Without an
    /// active operator there is nothing to compute and the total becomes `0`.
    pub fn evaluate(mut self, rules: &Rules) -> Self {
        if self.first_operand.is_empty() || self.current_operand.is_empty() {
            return self;
        }

        match self.operator {
            Some(Operator::Divide) if self.current_operand == "0" => {
                self.first_operand = rules.divide_by_zero_message.clone();
                self.divide_by_zero = true;
            }
            Some(op) => {
                let lhs = parse_operand(&self.first_operand);
                let rhs = parse_operand(&self.current_operand);
                self.first_operand = format_number(op.apply(lhs, rhs));
            }
            None => {
                self.first_operand = format_number(0.0);
            }
        }

        self.clear_after_evaluate()
    }

    /// Remove the last typed character, if any.
    pub fn delete_last_char(mut self) -> Self {
        self.current_operand.pop();
        self
    }

    /// Reset operands and operator.
    pub fn clear_memory(mut self) -> Self {
        self.first_operand.clear();
        self.operator = None;
        self.current_operand.clear();
        self
    }

    /// Reset operator and typed operand, keeping the running total.
    pub fn clear_after_evaluate(mut self) -> Self {
        self.operator = None;
        self.current_operand.clear();
        self
    }

    /// Derive the display lines without consuming the divide-by-zero flag.
    pub fn display(&self) -> Display {
        let top = match self.operator {
            Some(op) => format!("{} {}", self.first_operand, op),
            None => self.first_operand.clone(),
        };
        Display {
            top,
            bottom: self.current_operand.clone(),
        }
    }

    /// Derive the display lines and consume the divide-by-zero flag.
    ///
    /// When the flag is raised the returned display still shows the message,
    /// but the returned state is cleared.
    pub fn render(self) -> (Display, Self) {
        let display = self.display();
        if self.divide_by_zero {
            let mut cleared = self.clear_memory();
            cleared.divide_by_zero = false;
            return (display, cleared);
        }
        (display, self)
    }
}
