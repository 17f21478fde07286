// src/workflow/follow.rs
// =============================================================================
// "Resolve a short code to its destination and go there."
//
// Both the resolver and the submitter's follow action need exactly this, so
// it lives here once. The only difference between the two callers is HOW the
// destination is opened (NavigationMode):
// - resolver:  ReplaceDocument (the short link page becomes the destination)
// - submitter: NewContext (the submission page stays where it is)
//
// follow() performs the navigation itself only when a destination was found.
// What to do on NotFound / Failed is up to the caller, because the two
// callers deliberately react differently.
// =============================================================================

use super::Lifecycle;
use crate::api::{ShortCode, ShortenApi};
use crate::error::ApiError;
use crate::navigate::{NavigationMode, Navigator};
use tracing::{debug, info};

#[derive(Debug)]
pub enum FollowOutcome {
    /// The destination was found and navigated to
    Followed(String),
    /// The lookup succeeded but there is no destination for the code
    NotFound,
    /// Transport, status or body failure
    Failed(ApiError),
}

pub async fn follow(
    api: &dyn ShortenApi,
    navigator: &dyn Navigator,
    lifecycle: &Lifecycle,
    code: &ShortCode,
    mode: NavigationMode,
) -> FollowOutcome {
    debug!(%code, ?mode, "resolving short code");

    match api.lookup(code).await {
        Ok(Some(destination)) => {
            info!(%code, %destination, "short code resolved");
            lifecycle.run("navigation", || {
                navigator.navigate(mode.to_navigation(destination.clone()))
            });
            FollowOutcome::Followed(destination)
        }
        Ok(None) => {
            info!(%code, "short code has no destination");
            FollowOutcome::NotFound
        }
        Err(err) => FollowOutcome::Failed(err),
    }
}
