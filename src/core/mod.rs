//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operand state and its transitions
//! - Operators and operand text conversion
//! - Input events and the `apply` transition function
//! - Immutable transition history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod event;
mod history;
mod number;
mod operator;
mod rules;
mod state;

pub use event::{apply, Button, Event};
pub use history::{History, Transition, DEFAULT_HISTORY_LIMIT};
pub use number::{format_number, normalize_entry, parse_operand};
pub use operator::Operator;
pub use rules::{Rules, DEFAULT_MAX_ENTRY_LEN, DIVIDE_BY_ZERO_MESSAGE};
pub use state::{CalculatorState, Display};
