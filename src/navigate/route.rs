// src/navigate/route.rs
// =============================================================================
// The routing surface.
//
// - "/" (or nothing)        -> Home: the submission page, nothing to resolve
// - "/<segment>"            -> ShortCode: hand the segment to the resolver
// - anything deeper         -> Unknown
//
// Besides bare paths we also accept a whole short link
// ("https://sho.rt/abc123"), since that is what users usually paste.
// Query strings and fragments are not part of the code.
// =============================================================================

use crate::api::ShortCode;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ShortCode(ShortCode),
    Unknown(String),
}

impl Route {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        // Full URLs: only their path matters
        let path = match Url::parse(input) {
            Ok(url) if url.has_host() => url.path().to_string(),
            _ => strip_query_and_fragment(input).to_string(),
        };

        let trimmed = path.trim_start_matches('/');
        // A single trailing slash still matches "/:code"
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            Route::Home
        } else if trimmed.contains('/') {
            Route::Unknown(path)
        } else {
            Route::ShortCode(ShortCode::new(trimmed))
        }
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
