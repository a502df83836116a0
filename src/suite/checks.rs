//! Website smoke checks: reachability and minimal HTML shape.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::{CaseContext, SmokeCheck};
use crate::errors::CheckFailure;
use crate::Error;

pub const LOAD_FAILURE: &str = "Website should load successfully";
pub const HTML_FAILURE: &str = "Response should be HTML";
pub const TITLE_FAILURE: &str = "Website should have a title tag";

const HTML_CONTENT_TYPE: &str = "text/html";
const TITLE_MARKER: &str = "<title";

/// The standard website suite, in execution order
pub fn default_checks() -> Vec<Box<dyn SmokeCheck>> {
    vec![Box::new(Reachability), Box::new(TitlePresence)]
}

/// GET returns exactly 200 with an HTML content type
#[derive(Debug, Clone, Copy, Default)]
pub struct Reachability;

#[async_trait]
impl SmokeCheck for Reachability {
    fn name(&self) -> &'static str {
        "website_loads"
    }

    fn description(&self) -> &'static str {
        "Website loads with HTTP 200 and an HTML content type"
    }

    async fn run(&self, ctx: &CaseContext) -> Result<(), CheckFailure> {
        let response = ctx.get().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckFailure::assertion_with_detail(
                LOAD_FAILURE,
                format!("expected status 200, got {}", status.as_u16()),
            ));
        }

        // Missing or non-UTF-8 header values count as empty.
        let content_type =
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or("");
        if !content_type.contains(HTML_CONTENT_TYPE) {
            return Err(CheckFailure::assertion_with_detail(
                HTML_FAILURE,
                format!(
                    "expected content type containing '{}', got '{}'",
                    HTML_CONTENT_TYPE, content_type
                ),
            ));
        }

        Ok(())
    }
}

/// GET body contains a `<title` tag. The status code is not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitlePresence;

#[async_trait]
impl SmokeCheck for TitlePresence {
    fn name(&self) -> &'static str {
        "website_title"
    }

    fn description(&self) -> &'static str {
        "Website body contains a title tag"
    }

    async fn run(&self, ctx: &CaseContext) -> Result<(), CheckFailure> {
        let response = ctx.get().await?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport("Failed to read response body", e))?;

        if !body.contains(TITLE_MARKER) {
            return Err(CheckFailure::assertion_with_detail(
                TITLE_FAILURE,
                format!("'{}' not found in {} byte body", TITLE_MARKER, body.len()),
            ));
        }

        Ok(())
    }
}
