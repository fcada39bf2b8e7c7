//! Calculator that owns a state and applies events to it.

use crate::core::{
    apply, Button, CalculatorState, Display, Event, History, Operator, Rules, Transition,
};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// The calculator engine.
///
/// Holds the single [`CalculatorState`] for its whole lifetime, applies
/// events through the pure core, and records each transition.
///
/// # Example
///
/// ```rust
/// use tally::Calculator;
///
/// let mut calc = Calculator::new();
/// for key in ["3", "+", "4", "+", "5", "="] {
///     calc.dispatch_key(key);
/// }
///
/// let display = calc.render_display();
/// assert_eq!(display.top, "12");
/// assert_eq!(display.bottom, "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    rules: Rules,
    history: History,
}

impl Calculator {
    /// Create a calculator with default rules and history recording off.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_parts(rules: Rules, history: History) -> Self {
        Self {
            state: CalculatorState::new(),
            rules,
            history,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The most recently applied event, if it was recorded.
    pub fn last_event(&self) -> Option<Event> {
        self.history.last().map(|t| t.event)
    }

    pub fn append_digit(&mut self, digit: char) {
        self.handle(Event::Digit(digit));
    }

    pub fn append_decimal(&mut self) {
        self.handle(Event::Decimal);
    }

    pub fn set_operator(&mut self, op: Operator) {
        self.handle(Event::Operator(op));
    }

    pub fn evaluate(&mut self) {
        self.handle(Event::Evaluate);
    }

    pub fn delete_last_char(&mut self) {
        self.handle(Event::Delete);
    }

    pub fn clear_memory(&mut self) {
        self.handle(Event::Clear);
    }

    /// Apply a keypad button.
    pub fn press(&mut self, button: Button) {
        self.handle(button.into());
    }

    /// Route a raw key token.
    ///
    /// Returns `false` when the key is not one the calculator reacts to;
    /// the state is left untouched in that case.
    pub fn dispatch_key(&mut self, key: &str) -> bool {
        match Event::from_key(key) {
            Some(event) => {
                self.handle(event);
                true
            }
            None => {
                trace!(key, "ignored key");
                false
            }
        }
    }

    /// Apply one event and record the transition.
    pub fn handle(&mut self, event: Event) {
        let from = std::mem::take(&mut self.state);
        let snapshot = (self.history.limit() > 0).then(|| from.clone());
        let was_divide_by_zero = from.is_divide_by_zero();

        let next = apply(from, &event, &self.rules);

        if next.is_divide_by_zero() && !was_divide_by_zero {
            warn!("division by zero, showing message until next render");
        }
        debug!(
            event = event.name(),
            first = next.first_operand(),
            operator = ?next.operator(),
            current = next.current_operand(),
            "applied event"
        );

        if let Some(from) = snapshot {
            self.history = self.history.record(Transition {
                event,
                from,
                to: next.clone(),
                timestamp: Utc::now(),
            });
        }
        self.state = next;
    }

    /// Produce the two display lines.
    ///
    /// If a divide-by-zero message is pending it is returned this once and
    /// the calculator is cleared afterwards.
    pub fn render_display(&mut self) -> Display {
        let had_message = self.state.is_divide_by_zero();
        let (shown, next) = std::mem::take(&mut self.state).render();
        if had_message {
            debug!(top = %shown.top, "divide-by-zero message rendered, memory cleared");
        }
        self.state = next;
        shown
    }

    /// Produce the display lines without consuming a pending message.
    pub fn peek_display(&self) -> Display {
        self.state.display()
    }
}
