// src/api/http.rs
// =============================================================================
// HttpApiClient: the reqwest implementation of ShortenApi.
//
// Endpoints (relative to the configured API base):
// - POST /shorten          body {"url": ...}   -> {"short_code": ...}
// - GET  /shorten/{code}                       -> {"url": ...}
//
// How responses are classified:
// - request could not be sent        -> ApiError::Transport
// - any non-2xx status               -> ApiError::Status (no body parsing)
// - 2xx but the body is not our JSON -> ApiError::Malformed
//
// We read the body as text and decode it with serde_json ourselves instead
// of response.json(), so a bad body is reported as Malformed and not mixed
// up with transport errors.
// =============================================================================

use super::types::{LookupResponse, ShortenRequest, ShortenResponse};
use super::{ShortCode, ShortenApi};
use crate::error::{ApiError, ApiOperation};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the shortening API.
///
/// Cheap to clone: reqwest's Client is reference counted internally.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base: String,
}

impl HttpApiClient {
    // Creates a client for the API at `base` (e.g. "http://localhost:8080")
    //
    // No timeout is applied unless one is passed in: a hung request simply
    // stays pending, like it would in a browser.
    pub fn new(base: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base = base.into().trim_end_matches('/').to_string();

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }
}

// Checks the status, then decodes the body into T
async fn read_json<T: DeserializeOwned>(
    response: Response,
    operation: ApiOperation,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { operation, status });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ShortenApi for HttpApiClient {
    async fn shorten(&self, url: &str) -> Result<ShortCode, ApiError> {
        let endpoint = self.endpoint("shorten");
        debug!(%endpoint, url, "submitting url");

        let response = self
            .client
            .post(&endpoint)
            .json(&ShortenRequest { url })
            .send()
            .await?;

        let body: ShortenResponse = read_json(response, ApiOperation::Shorten).await?;

        // An empty string is as useless as a missing field
        body.short_code
            .filter(|code| !code.is_empty())
            .ok_or(ApiError::MissingShortCode)
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<String>, ApiError> {
        let endpoint = self.endpoint(&format!("shorten/{}", code));
        debug!(%endpoint, "looking up short code");

        let response = self.client.get(&endpoint).send().await?;
        let body: LookupResponse = read_json(response, ApiOperation::Lookup).await?;

        Ok(body.url.filter(|url| !url.is_empty()))
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why `impl Into<String>` for `base`?
//    - Callers can pass a &str, a String or a format!() result
//    - We take ownership once and store it
//
// 2. Why is `read_json` generic?
//    - Both endpoints share the same status/decoding rules
//    - `T: DeserializeOwned` means "any type serde can build from JSON
//      without borrowing from the input"
// -----------------------------------------------------------------------------
