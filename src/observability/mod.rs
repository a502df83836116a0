//! # Observability
//!
//! Structured logging for the smoke harness.

pub mod logging;

pub use logging::init_logging;
