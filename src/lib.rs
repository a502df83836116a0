//! # site-smoke
//!
//! A smoke-test harness for a locally served website. It issues plain HTTP
//! GET requests against a single base URL and checks that the site is
//! reachable, serves HTML, and carries a `<title` tag.
//!
//! ## Architecture
//!
//! ```text
//! CLI (clap) → SmokeConfig → SmokeSuite → [Reachability, TitlePresence] → SuiteReport
//!                                  ↓
//!                          tracing (stderr)
//! ```
//!
//! Cases run sequentially; a failing or errored case never stops the rest.
//! The binary exits 0 only when every case passed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use site_smoke::{SmokeConfig, SmokeSuite};
//!
//! #[tokio::main]
//! async fn main() -> site_smoke::Result<()> {
//!     let config = SmokeConfig::new("http://localhost:5173")?;
//!     let report = SmokeSuite::with_default_checks(config).run().await;
//!     assert!(report.is_success());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod suite;

// Re-export commonly used types and traits
pub use config::SmokeConfig;
pub use errors::{CheckFailure, Error, Result};
pub use suite::{CaseContext, CaseOutcome, CaseReport, SmokeCheck, SmokeSuite, SuiteReport};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
