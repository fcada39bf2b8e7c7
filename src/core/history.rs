//! Bounded transition history.
//!
//! Records which events were applied and what state they produced, for
//! diagnostics. History is immutable: `record` returns a new history.

use super::event::Event;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of transitions kept. Recording is opt-in.
pub const DEFAULT_HISTORY_LIMIT: usize = 0;

/// Record of a single applied event.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Event, Transition};
/// use chrono::Utc;
///
/// let transition = Transition {
///     event: Event::Digit('1'),
///     from: CalculatorState::new(),
///     to: CalculatorState::new().append_digit('1', &Default::default()),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.current_operand(), "1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The event that was applied
    pub event: Event,
    /// State before the event
    pub from: CalculatorState,
    /// State after the event
    pub to: CalculatorState,
    /// When the event was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of transitions.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Event, History, Transition};
/// use chrono::Utc;
///
/// let history = History::new(2);
/// let step = |event| Transition {
///     event,
///     from: CalculatorState::new(),
///     to: CalculatorState::new(),
///     timestamp: Utc::now(),
/// };
///
/// let history = history
///     .record(step(Event::Digit('1')))
///     .record(step(Event::Digit('2')))
///     .record(step(Event::Digit('3')));
///
/// // Only the newest two survive
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.last().map(|t| t.event), Some(Event::Digit('3')));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    transitions: Vec<Transition>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history keeping at most `limit` transitions.
    ///
    /// A limit of `0` disables recording.
    pub fn new(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The original history is left untouched. Past the limit the oldest
    /// transitions are dropped.
    pub fn record(&self, transition: Transition) -> Self {
        if self.limit == 0 {
            return self.clone();
        }

        let overflow = (self.transitions.len() + 1).saturating_sub(self.limit);
        let mut transitions: Vec<Transition> =
            self.transitions.iter().skip(overflow).cloned().collect();
        transitions.push(transition);

        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// States traversed: the `from` of the oldest kept transition, then the
    /// `to` of each transition.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest kept transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
