// src/error.rs
// =============================================================================
// Typed errors for everything below the binary.
//
// - ApiError: what can go wrong talking to the shortening API
// - ClipboardError: what can go wrong writing to the system clipboard
// - WorkflowError: what the resolver/submitter workflows report back
//
// The binary itself (main.rs, config.rs) uses anyhow::Result and attaches
// context; these enums are what it matches on to pick an exit code.
//
// Rust concepts:
// - thiserror: derive std::error::Error + Display from attributes
// - #[from]: generates From impls so the ? operator converts errors for us
// =============================================================================

use reqwest::StatusCode;
use std::fmt;
use std::process::ExitStatus;
use thiserror::Error;

/// Which API call failed. Its Display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    /// POST /shorten
    Shorten,
    /// GET /shorten/{code}
    Lookup,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiOperation::Shorten => write!(f, "Failed to shorten URL"),
            ApiOperation::Lookup => write!(f, "Failed to fetch original URL"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout (if one is configured), ...
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("{operation} (HTTP {status})")]
    Status {
        operation: ApiOperation,
        status: StatusCode,
    },

    /// The body of a 2xx response was not the JSON we expected
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// POST /shorten succeeded but the body carried no short_code
    #[error("response did not contain a short code")]
    MissingShortCode,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available on this platform")]
    Unsupported,

    #[error("could not run clipboard tool: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard tool exited with {0}")]
    Exited(ExitStatus),
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Empty or whitespace-only input, rejected before any request
    #[error("Please enter a URL")]
    EmptyUrl,

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    Busy,

    /// Copy/follow were requested before any short link was produced
    #[error("no short link has been produced yet")]
    NoShortLink,

    /// The lookup succeeded but the API has no destination for the code
    #[error("Short link not found")]
    NotFound,

    /// The workflow was disposed before the action started
    #[error("workflow has been disposed")]
    Disposed,

    #[error(transparent)]
    Api(#[from] ApiError),
}
