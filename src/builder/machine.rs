//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::core::History;
use crate::engine::Calculator;
use tracing::info;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// Starts from [`CalculatorConfig::default`]; individual setters override
/// single fields. The configuration is validated on [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_entry_len(mut self, len: usize) -> Self {
        self.config.max_entry_len = len;
        self
    }

    pub fn divide_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.config.divide_by_zero_message = message.into();
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the calculator.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.check()?;

        info!(
            max_entry_len = self.config.max_entry_len,
            history_limit = self.config.history_limit,
            "calculator built"
        );

        Ok(Calculator::with_parts(
            self.config.rules(),
            History::new(self.config.history_limit),
        ))
    }
}
