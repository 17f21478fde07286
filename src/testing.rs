// src/testing.rs
// =============================================================================
// Test doubles shared by the unit tests.
//
// - RecordingNotifier / RecordingNavigator / RecordingClipboard remember
//   every call so tests can assert on exactly what happened
// - GatedApi holds every request open until the test releases it, for
//   testing what happens while a request is in flight
//
// The API is usually mocked with mockall (MockShortenApi); GatedApi exists
// because a mock answers immediately and cannot stay pending.
// =============================================================================

use crate::api::{ShortCode, ShortenApi};
use crate::clipboard::Clipboard;
use crate::error::{ApiError, ClipboardError};
use crate::navigate::{Navigation, Navigator};
use crate::notify::{Notification, Notifier};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn destructive_count(&self) -> usize {
        self.notifications()
            .iter()
            .filter(|n| n.is_destructive())
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    seen: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn navigations(&self) -> Vec<Navigation> {
        self.seen.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, navigation: Navigation) {
        self.seen.lock().unwrap().push(navigation);
    }
}

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClipboard {
    // A clipboard whose every write fails
    pub fn failing() -> Self {
        Self {
            writes: Mutex::default(),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unsupported);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct GatedApi {
    gate: Arc<Notify>,
    short_code: Option<ShortCode>,
    destination: Option<String>,
}

impl GatedApi {
    pub fn shortening_to(code: &str) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            short_code: Some(ShortCode::new(code)),
            destination: None,
        }
    }

    pub fn resolving_to(destination: &str) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            short_code: None,
            destination: Some(destination.to_string()),
        }
    }

    // Call notify_one() on this to let one pending request settle
    pub fn gate(&self) -> Arc<Notify> {
        Arc::clone(&self.gate)
    }
}

#[async_trait]
impl ShortenApi for GatedApi {
    async fn shorten(&self, _url: &str) -> Result<ShortCode, ApiError> {
        self.gate.notified().await;
        self.short_code.clone().ok_or(ApiError::MissingShortCode)
    }

    async fn lookup(&self, _code: &ShortCode) -> Result<Option<String>, ApiError> {
        self.gate.notified().await;
        Ok(self.destination.clone())
    }
}
