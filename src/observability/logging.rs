//! # Structured Logging
//!
//! Logging uses the tracing ecosystem. Log output is written to stderr so the
//! suite report on stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Create a tracing span for a single smoke case.
///
/// ```rust,ignore
/// let span = check_span!("website_loads", base_url);
/// ```
#[macro_export]
macro_rules! check_span {
    ($case:expr, $base_url:expr) => {
        tracing::info_span!(
            "smoke_case",
            case = %$case,
            base_url = %$base_url,
            run_id = %uuid::Uuid::new_v4()
        )
    };
}

/// Default filter directive when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .is_err()
    {
        // Subscriber already set elsewhere (e.g. integration tests); ignore.
    }
}
