// src/workflow/submitter.rs
// =============================================================================
// The submitter workflow: a long URL goes in, a short link comes out.
//
// State machine:  idle -> submitting -> (success | failure) -> idle
//
// - empty/whitespace input is rejected right away, no request is made
// - while a submission is in flight, is_loading is true and a second
//   submission is refused
// - success replaces short_link with origin + "/" + code
// - failure leaves the previous short_link alone
// - is_loading goes back to false on EVERY exit path; this is done by a
//   guard's Drop impl, so it also happens on panics or when the future is
//   dropped halfway
//
// Once a short link exists it can be copied or followed. Following reuses
// the same lookup as the resolver but opens the destination in a new
// context instead of replacing the current one.
// =============================================================================

use super::follow::{follow, FollowOutcome};
use super::Lifecycle;
use crate::api::{ShortCode, ShortenApi};
use crate::clipboard::Clipboard;
use crate::error::{ApiError, WorkflowError};
use crate::navigate::{NavigationMode, Navigator};
use crate::notify::{Notification, Notifier};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

pub const EMPTY_URL: &str = "Please enter a URL";
pub const GENERIC_FAILURE: &str = "Failed to redirect to original URL";
pub const LINK_NOT_FOUND: &str = "Short link not found";

/// Everything the submission page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    pub short_link: Option<String>,
    pub is_loading: bool,
}

pub struct Submitter {
    api: Arc<dyn ShortenApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    clipboard: Arc<dyn Clipboard>,
    origin: String,
    state: Mutex<WorkflowState>,
    lifecycle: Lifecycle,
}

// Clears is_loading when dropped
struct LoadingGuard<'a> {
    state: &'a Mutex<WorkflowState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).is_loading = false;
    }
}

fn lock(state: &Mutex<WorkflowState>) -> MutexGuard<'_, WorkflowState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// Text for a failure notification: the error's own message if it has one
fn failure_description(err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

impl Submitter {
    // `origin` is the application's own base address; short links are built
    // on top of it
    pub fn new(
        api: Arc<dyn ShortenApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        clipboard: Arc<dyn Clipboard>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            clipboard,
            origin: origin.into(),
            state: Mutex::new(WorkflowState::default()),
            lifecycle: Lifecycle::new(),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> WorkflowState {
        lock(&self.state).clone()
    }

    /// Stops all further effects from requests that are still in flight.
    pub fn dispose(&self) {
        self.lifecycle.dispose();
    }

    /// Submits `url` for shortening and returns the new short link.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::EmptyUrl`] for blank input (no request is made)
    /// - [`WorkflowError::Busy`] while another submission is in flight
    /// - [`WorkflowError::Disposed`] after [`Submitter::dispose`]
    /// - [`WorkflowError::Api`] when the API call fails
    pub async fn submit(&self, url: &str) -> Result<String, WorkflowError> {
        if self.lifecycle.is_disposed() {
            return Err(WorkflowError::Disposed);
        }

        if url.trim().is_empty() {
            self.emit(Notification::error(EMPTY_URL));
            return Err(WorkflowError::EmptyUrl);
        }

        let _loading = self.start_loading()?;
        debug!(url, "submitting url");

        match self.api.shorten(url).await {
            Ok(code) => {
                let link = code.to_link(&self.origin);
                info!(%code, short_link = %link, "url shortened");

                self.update(|state| state.short_link = Some(link.clone()));
                self.emit(Notification::info("Success!", "Your URL has been shortened"));
                Ok(link)
            }
            Err(err) => {
                warn!(error = %err, "failed to shorten url");
                self.emit(Notification::error(failure_description(&err)));
                Err(err.into())
            }
        }
    }

    /// Copies the current short link to the clipboard.
    ///
    /// The confirmation is shown whether or not the clipboard write worked.
    pub async fn copy_short_link(&self) -> Result<(), WorkflowError> {
        let link = self.state().short_link.ok_or(WorkflowError::NoShortLink)?;

        if let Err(err) = self.clipboard.write_text(&link).await {
            debug!(error = %err, "clipboard write failed");
        }

        self.emit(Notification::info("Copied!", "URL copied to clipboard"));
        Ok(())
    }

    /// Looks up the current short link and opens its destination in a new
    /// browsing context.
    pub async fn follow_short_link(&self) -> Result<String, WorkflowError> {
        let link = self.state().short_link.ok_or(WorkflowError::NoShortLink)?;
        let code = ShortCode::from_link(&link).ok_or(WorkflowError::NoShortLink)?;

        let outcome = follow(
            self.api.as_ref(),
            self.navigator.as_ref(),
            &self.lifecycle,
            &code,
            NavigationMode::NewContext,
        )
        .await;

        match outcome {
            FollowOutcome::Followed(destination) => Ok(destination),
            FollowOutcome::NotFound => {
                self.emit(Notification::error(LINK_NOT_FOUND));
                Err(WorkflowError::NotFound)
            }
            FollowOutcome::Failed(err) => {
                warn!(%code, error = %err, "failed to follow short link");
                self.emit(Notification::error(failure_description(&err)));
                Err(err.into())
            }
        }
    }

    fn start_loading(&self) -> Result<LoadingGuard<'_>, WorkflowError> {
        let mut state = lock(&self.state);
        if state.is_loading {
            return Err(WorkflowError::Busy);
        }
        state.is_loading = true;

        Ok(LoadingGuard { state: &self.state })
    }

    fn update(&self, f: impl FnOnce(&mut WorkflowState)) {
        self.lifecycle.run("state update", || f(&mut lock(&self.state)));
    }

    fn emit(&self, notification: Notification) {
        self.lifecycle
            .run("notification", || self.notifier.notify(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockShortenApi;
    use crate::error::ApiOperation;
    use crate::navigate::Navigation;
    use crate::testing::{GatedApi, RecordingClipboard, RecordingNavigator, RecordingNotifier};
    use reqwest::StatusCode;

    const ORIGIN: &str = "https://sho.rt";

    struct Harness {
        submitter: Submitter,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
        clipboard: Arc<RecordingClipboard>,
    }

    fn harness(api: impl ShortenApi + 'static) -> Harness {
        harness_with_clipboard(api, RecordingClipboard::default())
    }

    fn harness_with_clipboard(
        api: impl ShortenApi + 'static,
        clipboard: RecordingClipboard,
    ) -> Harness {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let clipboard = Arc::new(clipboard);
        let submitter = Submitter::new(
            Arc::new(api),
            notifier.clone(),
            navigator.clone(),
            clipboard.clone(),
            ORIGIN,
        );
        Harness {
            submitter,
            notifier,
            navigator,
            clipboard,
        }
    }

    fn shortening_to(code: &'static str) -> MockShortenApi {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .returning(move |_| Ok(ShortCode::new(code)));
        api
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            operation: ApiOperation::Shorten,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_request() {
        // No expectations: any API call would panic
        let h = harness(MockShortenApi::new());

        for input in ["", "   ", "\t\n"] {
            let err = h.submitter.submit(input).await.unwrap_err();
            assert!(matches!(err, WorkflowError::EmptyUrl));
        }

        assert_eq!(h.notifier.destructive_count(), 3);
        assert_eq!(h.notifier.notifications()[0], Notification::error(EMPTY_URL));
        assert_eq!(h.submitter.state(), WorkflowState::default());
    }

    #[tokio::test]
    async fn test_success_builds_short_link_from_origin() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .withf(|url| url == "https://example.com/a/very/long/path")
            .times(1)
            .returning(|_| Ok(ShortCode::new("abc123")));

        let h = harness(api);
        let link = h
            .submitter
            .submit("https://example.com/a/very/long/path")
            .await
            .unwrap();

        assert_eq!(link, "https://sho.rt/abc123");
        assert_eq!(
            h.submitter.state(),
            WorkflowState {
                short_link: Some("https://sho.rt/abc123".to_string()),
                is_loading: false,
            }
        );
        assert_eq!(
            h.notifier.notifications(),
            vec![Notification::info("Success!", "Your URL has been shortened")]
        );
    }

    #[tokio::test]
    async fn test_success_replaces_previous_link() {
        let mut api = MockShortenApi::new();
        let mut codes = vec!["second", "first"];
        api.expect_shorten()
            .times(2)
            .returning(move |_| Ok(ShortCode::new(codes.pop().unwrap())));

        let h = harness(api);
        h.submitter.submit("https://example.com/1").await.unwrap();
        h.submitter.submit("https://example.com/2").await.unwrap();

        assert_eq!(
            h.submitter.state().short_link.as_deref(),
            Some("https://sho.rt/second")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_link() {
        let mut api = MockShortenApi::new();
        let mut calls = 0;
        api.expect_shorten().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(ShortCode::new("abc123"))
            } else {
                Err(server_error())
            }
        });

        let h = harness(api);
        h.submitter.submit("https://example.com/1").await.unwrap();
        let err = h.submitter.submit("https://example.com/2").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ApiError::Status { .. })));
        let state = h.submitter.state();
        assert_eq!(state.short_link.as_deref(), Some("https://sho.rt/abc123"));
        assert!(!state.is_loading);

        let notifications = h.notifier.notifications();
        assert_eq!(notifications.len(), 2);
        assert!(notifications[1].is_destructive());
        assert_eq!(
            notifications[1].description,
            "Failed to shorten URL (HTTP 500 Internal Server Error)"
        );
    }

    #[tokio::test]
    async fn test_missing_short_code_is_a_failure() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .times(1)
            .returning(|_| Err(ApiError::MissingShortCode));

        let h = harness(api);
        let err = h.submitter.submit("https://example.com").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ApiError::MissingShortCode)));
        assert_eq!(h.submitter.state(), WorkflowState::default());
        assert_eq!(h.notifier.destructive_count(), 1);
    }

    #[tokio::test]
    async fn test_loading_while_in_flight_and_duplicate_refused() {
        let api = GatedApi::shortening_to("abc123");
        let gate = api.gate();
        let h = harness(api);

        let second = async {
            assert!(h.submitter.state().is_loading);
            let result = h.submitter.submit("https://example.com").await;
            gate.notify_one();
            result
        };
        let (first, second) = tokio::join!(h.submitter.submit("https://example.com"), second);

        assert_eq!(first.unwrap(), "https://sho.rt/abc123");
        assert!(matches!(second, Err(WorkflowError::Busy)));
        assert!(!h.submitter.state().is_loading);
        assert_eq!(h.notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_submission_clears_loading() {
        let api = GatedApi::shortening_to("abc123");
        let h = harness(api);

        {
            // Poll once so the request is in flight, then drop it
            let mut submission = Box::pin(h.submitter.submit("https://example.com"));
            assert!(futures::poll!(submission.as_mut()).is_pending());
            assert!(h.submitter.state().is_loading);
        }

        assert!(!h.submitter.state().is_loading);
        assert_eq!(h.submitter.state().short_link, None);
    }

    #[tokio::test]
    async fn test_disposed_while_in_flight_has_no_effects() {
        let api = GatedApi::shortening_to("abc123");
        let gate = api.gate();
        let h = harness(api);

        let release = async {
            h.submitter.dispose();
            gate.notify_one();
        };
        let (result, ()) = tokio::join!(h.submitter.submit("https://example.com"), release);

        assert!(result.is_ok());
        assert_eq!(h.submitter.state(), WorkflowState::default());
        assert!(h.notifier.notifications().is_empty());

        let err = h.submitter.submit("https://example.com").await.unwrap_err();
        assert!(matches!(err, WorkflowError::Disposed));
    }

    #[tokio::test]
    async fn test_copy_twice_confirms_twice() {
        let h = harness(shortening_to("abc123"));
        h.submitter.submit("https://example.com").await.unwrap();

        h.submitter.copy_short_link().await.unwrap();
        h.submitter.copy_short_link().await.unwrap();

        assert_eq!(
            h.clipboard.writes(),
            vec!["https://sho.rt/abc123".to_string(), "https://sho.rt/abc123".to_string()]
        );
        let copied: Vec<_> = h
            .notifier
            .notifications()
            .into_iter()
            .filter(|n| n.title == "Copied!")
            .collect();
        assert_eq!(copied.len(), 2);
        assert_eq!(
            h.submitter.state().short_link.as_deref(),
            Some("https://sho.rt/abc123")
        );
    }

    #[tokio::test]
    async fn test_copy_confirms_even_if_clipboard_fails() {
        let h = harness_with_clipboard(shortening_to("abc123"), RecordingClipboard::failing());
        h.submitter.submit("https://example.com").await.unwrap();

        h.submitter.copy_short_link().await.unwrap();

        assert_eq!(
            h.notifier.notifications().last(),
            Some(&Notification::info("Copied!", "URL copied to clipboard"))
        );
    }

    #[tokio::test]
    async fn test_copy_and_follow_need_a_short_link() {
        let h = harness(MockShortenApi::new());

        assert!(matches!(
            h.submitter.copy_short_link().await,
            Err(WorkflowError::NoShortLink)
        ));
        assert!(matches!(
            h.submitter.follow_short_link().await,
            Err(WorkflowError::NoShortLink)
        ));
        assert!(h.notifier.notifications().is_empty());
        assert!(h.clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn test_follow_opens_destination_in_new_context() {
        let mut api = shortening_to("abc123");
        api.expect_lookup()
            .withf(|code| code.as_str() == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/long".to_string())));

        let h = harness(api);
        h.submitter.submit("https://example.com/long").await.unwrap();
        let destination = h.submitter.follow_short_link().await.unwrap();

        assert_eq!(destination, "https://example.com/long");
        assert_eq!(
            h.navigator.navigations(),
            vec![Navigation::NewContext("https://example.com/long".to_string())]
        );
    }

    #[tokio::test]
    async fn test_follow_failure_notifies_without_navigating() {
        let mut api = shortening_to("abc123");
        api.expect_lookup().times(1).returning(|_| {
            Err(ApiError::Status {
                operation: ApiOperation::Lookup,
                status: StatusCode::NOT_FOUND,
            })
        });

        let h = harness(api);
        h.submitter.submit("https://example.com").await.unwrap();
        let err = h.submitter.follow_short_link().await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(_)));
        assert!(h.navigator.navigations().is_empty());
        let last = h.notifier.notifications().pop().unwrap();
        assert!(last.is_destructive());
        assert!(last.description.starts_with("Failed to fetch original URL"));
    }

    #[tokio::test]
    async fn test_follow_not_found_notifies() {
        let mut api = shortening_to("abc123");
        api.expect_lookup().times(1).returning(|_| Ok(None));

        let h = harness(api);
        h.submitter.submit("https://example.com").await.unwrap();
        let err = h.submitter.follow_short_link().await.unwrap_err();

        assert!(matches!(err, WorkflowError::NotFound));
        assert_eq!(
            h.notifier.notifications().last(),
            Some(&Notification::error(LINK_NOT_FOUND))
        );
        assert!(h.navigator.navigations().is_empty());
    }
}
