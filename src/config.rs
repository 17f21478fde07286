// src/config.rs
// =============================================================================
// Runtime configuration, built once at startup.
//
// Sources, highest priority first:
// 1. command-line flags (--api-url, --origin, ...)
// 2. environment variables (LINKCRUSH_API_URL, LINKCRUSH_ORIGIN)
// 3. a .env file in the working directory (loaded by main via dotenvy)
// 4. the defaults below
//
// The workflows never read the environment themselves; they get these
// values handed to them when they are built.
// =============================================================================

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

/// Where the shortening API listens by default.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default origin short links are built on (the web front end in dev).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the shortening API, without trailing slash
    pub api_base: String,
    /// The application's own base address, without trailing slash
    pub origin: String,
    /// Per-request timeout; None means requests may wait forever
    pub request_timeout: Option<Duration>,
    /// Whether navigations may launch the system browser
    pub open_browser: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base = parse_base_url(&cli.api_url)
            .context("invalid API address (--api-url / LINKCRUSH_API_URL)")?;
        let origin = parse_base_url(&cli.origin)
            .context("invalid origin (--origin / LINKCRUSH_ORIGIN)")?;

        Ok(Self {
            api_base,
            origin,
            request_timeout: cli.timeout.map(Duration::from_secs),
            open_browser: !cli.no_browser,
        })
    }
}

// Validates an absolute http(s) base address and normalizes it
//
// "https://sho.rt/" -> "https://sho.rt"
fn parse_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("'{}' is not an absolute URL", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}' in '{}'", url.scheme(), raw);
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("'{}' must not contain a query string or fragment", raw);
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
