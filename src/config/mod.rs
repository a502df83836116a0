//! # Configuration Management
//!
//! The harness has exactly one configuration value: the base URL of the site
//! under test. It is resolved once at startup and handed to the suite, which
//! copies it into every per-case context.

use crate::{Error, Result};
use tracing::debug;
use url::Url;

/// Target used when no `--base-url` flag is given
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Smoke suite configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeConfig {
    base_url: Url,
}

impl SmokeConfig {
    /// Create configuration for an explicit base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self { base_url: parse_base_url(base_url)? })
    }

    /// Resolve configuration from the command line flag, falling back to
    /// http://localhost:5173. The environment is never consulted.
    pub fn resolve(base_url_flag: Option<String>) -> Result<Self> {
        let base_url = resolve_base_url(base_url_flag);
        Self::new(&base_url)
    }

    /// The target every smoke case requests
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Pick the base URL from the flag, or the default
pub fn resolve_base_url(flag: Option<String>) -> String {
    if let Some(url) = flag {
        debug!("Using base URL from --base-url flag: {}", url);
        return url;
    }

    debug!("Using default base URL: {}", DEFAULT_BASE_URL);
    DEFAULT_BASE_URL.to_string()
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::config("Base URL must not be empty"));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "Base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::config(format!("Base URL '{}' has no host", trimmed)));
    }

    Ok(url)
}
