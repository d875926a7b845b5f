//! One-shot download of the default NSF COA template

// During coverage builds, the stubbed fetch doesn't use all imports
#![cfg_attr(coverage, allow(unused_imports, dead_code))]

use crate::error::{CoaError, CoaResult};
use crate::writer::write_atomically;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

const USER_AGENT: &str = concat!("ads2coa/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(60);

fn fetch_error(url: &str, reason: impl ToString) -> CoaError {
    CoaError::Fetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Download `url` and store it at `dest`.
///
/// A blocking GET with no retry; any failure is fatal to the run.
///
/// # Coverage Exclusion
/// Makes an HTTP request - cannot unit test network calls
#[cfg(not(coverage))]
pub fn fetch_template(url: &str, dest: &Path) -> CoaResult<()> {
    info!(url, dest = %dest.display(), "downloading template");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| fetch_error(url, e))?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| fetch_error(url, e))?;

    let bytes = response.bytes().map_err(|e| fetch_error(url, e))?;
    if bytes.is_empty() {
        return Err(fetch_error(url, "empty response body"));
    }

    write_atomically(dest, |partial| Ok(fs::write(partial, &bytes)?))
}

/// Stub for coverage builds
#[cfg(coverage)]
pub fn fetch_template(url: &str, _dest: &Path) -> CoaResult<()> {
    Err(fetch_error(url, "network disabled in coverage builds"))
}
