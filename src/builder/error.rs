//! Errors raised while configuring and building a calculator.

use thiserror::Error;

/// A single rule broken by a [`crate::builder::CalculatorConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_entry_len must be at least 1 (got {0})")]
    EntryLimitTooSmall(usize),

    #[error("divide_by_zero_message must not be empty")]
    EmptyMessage,

    #[error("divide_by_zero_message must not read as a number (got {0:?})")]
    NumericMessage(String),
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more rules were broken; every violation is listed
    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
