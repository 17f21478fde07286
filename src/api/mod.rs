// src/api/mod.rs
// =============================================================================
// This module is the boundary to the shortening API.
//
// Submodules:
// - types: ShortCode plus the JSON request/response bodies
// - http: HttpApiClient, the reqwest implementation of ShortenApi
//
// Both workflows only ever see the ShortenApi trait, so tests can hand them
// a mock (see MockShortenApi, generated by mockall under cfg(test)).
// =============================================================================

mod http;
mod types;

pub use http::HttpApiClient;
pub use types::ShortCode;

use crate::error::ApiError;
use async_trait::async_trait;

/// The two calls the client makes against the shortening API.
///
/// # Implementations
///
/// - [`HttpApiClient`] - talks HTTP/JSON to the real service
/// - `MockShortenApi` - generated for tests with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// Asks the API to mint a short code for `url`.
    ///
    /// The URL is sent as typed; the server decides whether it is valid.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] / [`ApiError::Status`] when the request fails
    /// - [`ApiError::Malformed`] when the body is not JSON
    /// - [`ApiError::MissingShortCode`] when the body has no `short_code`
    async fn shorten(&self, url: &str) -> Result<ShortCode, ApiError>;

    /// Resolves `code` to its destination.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the API knows the code
    /// - `Ok(None)` if the response succeeded without a destination
    ///
    /// # Errors
    ///
    /// Transport, status and body-decoding failures.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<String>, ApiError>;
}
