//! # Smoke Suite
//!
//! Runs an explicit, ordered list of smoke checks against the configured base
//! URL. Each case gets a fresh [`CaseContext`] (its own copy of the URL and its
//! own HTTP client), so no response or connection is shared between cases.
//!
//! Cases run one after another. A failed or errored case never stops the
//! remaining cases; the suite always returns a complete [`SuiteReport`].

pub mod checks;
pub mod outcome;

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info, warn, Instrument};
use url::Url;

use crate::check_span;
use crate::config::SmokeConfig;
use crate::errors::CheckFailure;
use crate::{Error, Result};

pub use checks::{default_checks, Reachability, TitlePresence};
pub use outcome::{CaseOutcome, CaseReport, SuiteReport};

/// A single named smoke check
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    /// Stable case name used in reports
    fn name(&self) -> &'static str;

    /// Human-readable summary of what the case verifies
    fn description(&self) -> &'static str;

    /// Execute the check against the per-case context
    async fn run(&self, ctx: &CaseContext) -> std::result::Result<(), CheckFailure>;
}

/// Per-case state, rebuilt before every case
#[derive(Debug)]
pub struct CaseContext {
    base_url: Url,
    client: Client,
}

impl CaseContext {
    /// Build the context for one case. The client keeps reqwest's defaults,
    /// including its timeout behavior.
    pub fn new(config: &SmokeConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::transport("Failed to build HTTP client", e))?;

        Ok(Self { base_url: config.base_url().clone(), client })
    }

    /// Send a single GET to the base URL
    pub async fn get(&self) -> Result<Response> {
        debug!("GET {}", self.base_url);
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(format!("GET {} failed", self.base_url), e))?;

        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

/// Ordered collection of smoke checks bound to one target
pub struct SmokeSuite {
    config: SmokeConfig,
    checks: Vec<Box<dyn SmokeCheck>>,
}

impl SmokeSuite {
    /// Create a suite from an explicit list of checks, run in the given order
    pub fn new(config: SmokeConfig, checks: Vec<Box<dyn SmokeCheck>>) -> Self {
        Self { config, checks }
    }

    /// Create the standard website suite: reachability, then title presence
    pub fn with_default_checks(config: SmokeConfig) -> Self {
        Self::new(config, default_checks())
    }

    /// Registered case names in execution order
    pub fn case_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Run every case sequentially and collect the report
    pub async fn run(&self) -> SuiteReport {
        let target = self.config.base_url().to_string();
        info!(base_url = %target, cases = self.checks.len(), "Starting smoke suite");

        let mut report = SuiteReport::new(target.clone());
        for check in &self.checks {
            let span = check_span!(check.name(), target);
            let started = Instant::now();
            let outcome = run_case(check.as_ref(), &self.config).instrument(span).await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            report.record(CaseReport {
                name: check.name().to_string(),
                description: check.description().to_string(),
                outcome,
                elapsed_ms,
            });
        }

        info!(
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            "Smoke suite finished"
        );
        report
    }
}

async fn run_case(check: &dyn SmokeCheck, config: &SmokeConfig) -> CaseOutcome {
    let ctx = match CaseContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            let message = error_chain(&e);
            warn!(error = %message, "Case could not start");
            return CaseOutcome::Errored { message };
        }
    };

    match check.run(&ctx).await {
        Ok(()) => {
            debug!("Case passed");
            CaseOutcome::Passed
        }
        Err(CheckFailure::Assertion { message, detail }) => {
            warn!(reason = %message, detail = ?detail, "Case failed");
            CaseOutcome::Failed { message, detail }
        }
        Err(CheckFailure::Network(e)) => {
            let message = error_chain(&e);
            warn!(error = %message, "Case errored");
            CaseOutcome::Errored { message }
        }
    }
}

/// Render an error and its sources as `outer: inner: root`
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
