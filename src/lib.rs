//! Tally: a pure functional keypad calculator engine
//!
//! Tally is built on the "pure core, imperative shell" philosophy.
//! Every transition of the calculator is a pure function from one
//! [`CalculatorState`] to the next; the [`Calculator`] shell owns the live
//! state, logs with `tracing` and keeps a bounded transition history.
//!
//! Arithmetic is sequential and left-to-right over `+ - x ÷`. Pressing a new
//! operator while two operands are pending folds the pending computation
//! into the running total, so `3 + 4 + 5 =` shows `12`.
//!
//! # Core Concepts
//!
//! - **State**: operands held as text plus the active operator
//! - **Events**: digit, decimal, operator, evaluate, delete and clear inputs
//! - **Display**: the two lines a host writes to its screen after each event
//!
//! # Example
//!
//! ```rust
//! use tally::{CalculatorBuilder, Button, Operator};
//!
//! let mut calc = CalculatorBuilder::new().build().unwrap();
//!
//! calc.press(Button::Digit('8'));
//! calc.press(Button::Operator(Operator::Divide));
//! calc.press(Button::Digit('0'));
//! calc.press(Button::Equals);
//!
//! // The message is shown for exactly one render...
//! assert_eq!(calc.render_display().top, "We don't do that here");
//! // ...then the calculator starts over.
//! assert_eq!(calc.render_display().top, "");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::builder::{BuildError, CalculatorBuilder, CalculatorConfig, ConfigError};
pub use self::core::{Button, CalculatorState, Display, Event, Operator};
pub use self::engine::Calculator;
