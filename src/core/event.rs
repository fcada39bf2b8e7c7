//! Input events and the pure transition function.

use super::operator::Operator;
use super::rules::Rules;
use super::state::CalculatorState;
use serde::{Deserialize, Serialize};

/// A discrete input understood by the calculator.
///
/// Key tokens and keypad buttons are both converted into events before
/// being applied.
///
/// # Example
///
/// ```rust
/// use tally::core::{apply, CalculatorState, Event, Rules};
///
/// let rules = Rules::default();
/// let state = ["1", "+", "2", "Enter"]
///     .iter()
///     .filter_map(|key| Event::from_key(key))
///     .fold(CalculatorState::new(), |state, event| apply(state, &event, &rules));
///
/// assert_eq!(state.first_operand(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Digit(char),
    Decimal,
    Operator(Operator),
    Evaluate,
    Delete,
    Clear,
}

impl Event {
    /// Route a raw key token to an event.
    ///
    /// Returns `None` for keys the calculator ignores. There is no key for
    /// [`Event::Clear`]; it is reachable through [`Button::Clear`] only.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Some(Self::Digit(c));
            }
        }

        if let Some(op) = Operator::from_symbol(key) {
            return Some(Self::Operator(op));
        }

        match key {
            "." => Some(Self::Decimal),
            "Enter" | "=" => Some(Self::Evaluate),
            "Backspace" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Evaluate => "Evaluate",
            Self::Delete => "Delete",
            Self::Clear => "Clear",
        }
    }
}

/// A button on the on-screen keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Digit(char),
    Operator(Operator),
    Decimal,
    Equals,
    Delete,
    Clear,
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        match button {
            Button::Digit(c) => Event::Digit(c),
            Button::Operator(op) => Event::Operator(op),
            Button::Decimal => Event::Decimal,
            Button::Equals => Event::Evaluate,
            Button::Delete => Event::Delete,
            Button::Clear => Event::Clear,
        }
    }
}

/// Apply one event to a state, returning the next state (pure).
///
/// A digit event carrying anything other than `0`-`9` leaves the state
/// unchanged.
pub fn apply(state: CalculatorState, event: &Event, rules: &Rules) -> CalculatorState {
    match *event {
        Event::Digit(c) if c.is_ascii_digit() => state.append_digit(c, rules),
        Event::Digit(_) => state,
        Event::Decimal => state.append_decimal(),
        Event::Operator(op) => state.set_operator(op, rules),
        Event::Evaluate => state.evaluate(rules),
        Event::Delete => state.delete_last_char(),
        Event::Clear => state.clear_memory(),
    }
}
