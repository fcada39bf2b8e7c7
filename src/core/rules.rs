//! Entry limits and fixed texts consulted by pure transitions.

use serde::{Deserialize, Serialize};

/// Default cap on the number of characters typed into one operand.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 15;

/// Default text shown in place of a result when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "We don't do that here";

/// Parameters of the pure transition functions.
///
/// Transitions never read globals; everything tunable arrives through this
/// value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Once an operand reaches this many characters the next digit restarts
    /// entry instead of extending it.
    pub max_entry_len: usize,

    /// Text written into the running total on a divide-by-zero.
    pub divide_by_zero_message: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            divide_by_zero_message: DIVIDE_BY_ZERO_MESSAGE.to_string(),
        }
    }
}
