// src/workflow/resolver.rs
// =============================================================================
// The resolver workflow: a short code arrives in the path, we follow it.
//
// activate(code) outcomes:
// - no code                    -> Idle, nothing happens ("/" is the
//                                 submission page, not a short link)
// - same code as last time     -> Unchanged, nothing happens
// - destination found          -> full document navigation to it
// - success but no destination -> in-app navigation back to "/"
// - any failure                -> one error notification, then back to "/"
//
// At most one navigation and at most one notification per activation.
// Activations for different codes are not serialized: if two overlap, the
// one that settles last navigates last.
// =============================================================================

use super::follow::{follow, FollowOutcome};
use super::Lifecycle;
use crate::api::{ShortCode, ShortenApi};
use crate::error::ApiError;
use crate::navigate::{Navigation, NavigationMode, Navigator};
use crate::notify::{Notification, Notifier};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

pub const REDIRECT_FAILED: &str = "Failed to redirect to original URL";

/// What a single activation ended up doing.
#[derive(Debug)]
pub enum Resolution {
    /// No short code in the path
    Idle,
    /// Already activated for this code
    Unchanged,
    /// Navigated to the destination
    Redirected(String),
    /// Sent back to "/" because the code has no destination
    NotFound,
    /// Sent back to "/" after notifying about the failure
    Failed(ApiError),
}

pub struct Resolver {
    api: Arc<dyn ShortenApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    lifecycle: Lifecycle,
    // Code of the latest activation
    active: Mutex<Option<ShortCode>>,
}

impl Resolver {
    pub fn new(
        api: Arc<dyn ShortenApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            lifecycle: Lifecycle::new(),
            active: Mutex::new(None),
        }
    }

    /// Stops all further effects from requests that are still in flight.
    pub fn dispose(&self) {
        self.lifecycle.dispose();
    }

    pub async fn activate(&self, code: Option<ShortCode>) -> Resolution {
        if !self.take_activation(code.as_ref()) {
            return Resolution::Unchanged;
        }

        let Some(code) = code else {
            return Resolution::Idle;
        };

        let outcome = follow(
            self.api.as_ref(),
            self.navigator.as_ref(),
            &self.lifecycle,
            &code,
            NavigationMode::ReplaceDocument,
        )
        .await;

        match outcome {
            FollowOutcome::Followed(destination) => Resolution::Redirected(destination),
            FollowOutcome::NotFound => {
                self.go_home();
                Resolution::NotFound
            }
            FollowOutcome::Failed(err) => {
                warn!(%code, error = %err, "failed to resolve short code");
                self.lifecycle.run("notification", || {
                    self.notifier.notify(Notification::error(REDIRECT_FAILED))
                });
                self.go_home();
                Resolution::Failed(err)
            }
        }
    }

    // Records `code` as the current one
    //
    // Returns false when it is the same as the previous activation.
    fn take_activation(&self, code: Option<&ShortCode>) -> bool {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if active.is_some() && active.as_ref() == code {
            return false;
        }
        *active = code.cloned();
        true
    }

    fn go_home(&self) {
        self.lifecycle
            .run("navigation", || self.navigator.navigate(Navigation::root()));
    }
}
