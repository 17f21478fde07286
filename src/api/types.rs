// src/api/types.rs
// =============================================================================
// Data that crosses the API boundary.
//
// - ShortCode: an opaque token. We never validate its shape, the API is the
//   authority on what a code looks like.
// - ShortenRequest / ShortenResponse: POST /shorten
// - LookupResponse: GET /shorten/{code}
//
// The backend returns more fields than we read (id, access_count, ...).
// serde ignores unknown fields by default, so those just fall away.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a stored URL mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the shareable short link: `origin/code`.
    ///
    /// A trailing slash on `origin` is ignored so we never produce `//`.
    pub fn to_link(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.0)
    }

    /// Pulls the trailing path segment back out of a short link.
    ///
    /// Returns None when the link ends in `/` (no segment to follow).
    pub fn from_link(link: &str) -> Option<Self> {
        link.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(Self::new)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Body of POST /shorten
#[derive(Debug, Serialize)]
pub(crate) struct ShortenRequest<'a> {
    pub url: &'a str,
}

// Body of a successful POST /shorten
#[derive(Debug, Deserialize)]
pub(crate) struct ShortenResponse {
    #[serde(default)]
    pub short_code: Option<ShortCode>,
}

// Body of a successful GET /shorten/{code}
//
// A missing (or null) url is a valid answer meaning "not found".
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_link_joins_origin_and_code() {
        let code = ShortCode::new("abc123");
        assert_eq!(code.to_link("https://sho.rt"), "https://sho.rt/abc123");
        assert_eq!(code.to_link("https://sho.rt/"), "https://sho.rt/abc123");
        assert_eq!(code.to_link("https://sho.rt/s"), "https://sho.rt/s/abc123");
    }

    #[test]
    fn test_from_link_takes_trailing_segment() {
        assert_eq!(
            ShortCode::from_link("https://sho.rt/abc123"),
            Some(ShortCode::new("abc123"))
        );
        assert_eq!(ShortCode::from_link("https://sho.rt/"), None);
    }

    #[test]
    fn test_lookup_response_without_url_is_none() {
        let body: LookupResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.url, None);

        let body: LookupResponse = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert_eq!(body.url, None);
    }

    #[test]
    fn test_shorten_response_ignores_extra_fields() {
        let body: ShortenResponse = serde_json::from_str(
            r#"{"id": "0b5c", "url": "https://example.com", "short_code": "Xy7pQ2aB"}"#,
        )
        .unwrap();
        assert_eq!(body.short_code, Some(ShortCode::new("Xy7pQ2aB")));
    }
}
