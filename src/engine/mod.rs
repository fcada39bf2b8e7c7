//! Imperative shell around the pure core.
//!
//! The [`Calculator`] owns the one live state, feeds input through
//! [`crate::core::apply`], logs every transition with `tracing`, and keeps
//! a bounded [`crate::core::History`].

mod machine;

pub use machine::Calculator;
