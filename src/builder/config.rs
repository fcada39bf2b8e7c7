//! Calculator configuration loaded from TOML and validated with `Validation`.

use crate::builder::error::{ConfigError, ConfigViolation};
use crate::core::{
    parse_operand, Rules, DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_ENTRY_LEN, DIVIDE_BY_ZERO_MESSAGE,
};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tunable settings for a calculator.
///
/// Every field has a default, so a partial (or empty) TOML document is
/// valid.
///
/// # Example
///
/// ```rust
/// use tally::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_toml_str(r#"
///     max_entry_len = 10
///     history_limit = 0
/// "#).unwrap();
///
/// assert_eq!(config.max_entry_len, 10);
/// assert_eq!(config.divide_by_zero_message, "We don't do that here");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters allowed in a typed operand before entry restarts
    pub max_entry_len: usize,

    /// Text shown instead of a result when dividing by zero
    pub divide_by_zero_message: String,

    /// Transitions kept for diagnostics (0 disables recording)
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            divide_by_zero_message: DIVIDE_BY_ZERO_MESSAGE.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.max_entry_len == 0 {
            Validation::fail(ConfigViolation::EntryLimitTooSmall(self.max_entry_len))
        } else {
            Validation::success(())
        });

        let message = &self.divide_by_zero_message;
        checks.push(if message.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyMessage)
        } else if !parse_operand(message.trim()).is_nan() {
            Validation::fail(ConfigViolation::NumericMessage(message.clone()))
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) collapsed into a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Transition rules derived from this configuration.
    pub fn rules(&self) -> Rules {
        Rules {
            max_entry_len: self.max_entry_len,
            divide_by_zero_message: self.divide_by_zero_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.rules(), Rules::default());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            max_entry_len = 8
            divide_by_zero_message = "Nope"
            history_limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.max_entry_len, 8);
        assert_eq!(config.divide_by_zero_message, "Nope");
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = CalculatorConfig::from_toml_str("max_entry_len = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CalculatorConfig {
            max_entry_len: 0,
            divide_by_zero_message: "  ".to_string(),
            history_limit: 1,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EntryLimitTooSmall(0))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyMessage)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn numeric_message_is_rejected() {
        let config = CalculatorConfig {
            divide_by_zero_message: "Infinity".to_string(),
            ..CalculatorConfig::default()
        };

        let result = config.check();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ref v)) if v == &vec![ConfigViolation::NumericMessage("Infinity".to_string())]
        ));
    }
}
