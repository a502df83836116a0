//! # Error Handling
//!
//! Error types for the smoke-test harness, defined with `thiserror`.
//!
//! Crate-level failures (bad configuration, transport problems) use [`Error`].
//! Failures inside a single smoke check use [`CheckFailure`], which separates
//! assertion failures from network errors so the suite can report them as
//! failed and errored respectively.

/// Custom result type for site-smoke operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke-test harness
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network transport errors
    #[error("Transport error: {context}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a transport error wrapping the underlying HTTP client error
    pub fn transport<S: Into<String>>(context: S, source: reqwest::Error) -> Self {
        Self::Transport { context: context.into(), source }
    }
}

/// Reason a single smoke check did not pass
#[derive(thiserror::Error, Debug)]
pub enum CheckFailure {
    /// An expected condition did not hold
    #[error("{message}")]
    Assertion { message: String, detail: Option<String> },

    /// The request could not complete, so the check never reached its assertions
    #[error(transparent)]
    Network(#[from] Error),
}

impl CheckFailure {
    /// Create an assertion failure with a fixed message
    pub fn assertion<S: Into<String>>(message: S) -> Self {
        Self::Assertion { message: message.into(), detail: None }
    }

    /// Create an assertion failure describing the observed value
    pub fn assertion_with_detail<S: Into<String>, D: Into<String>>(message: S, detail: D) -> Self {
        Self::Assertion { message: message.into(), detail: Some(detail.into()) }
    }
}
