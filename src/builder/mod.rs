//! Builder API for calculator construction.
//!
//! This module provides the fluent [`CalculatorBuilder`], the TOML-backed
//! [`CalculatorConfig`] it consumes, and the errors raised when either is
//! invalid.

pub mod config;
pub mod error;
pub mod machine;

pub use config::CalculatorConfig;
pub use error::{BuildError, ConfigError, ConfigViolation};
pub use machine::CalculatorBuilder;
