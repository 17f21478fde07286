// src/notify/mod.rs
// =============================================================================
// The notification sink: how the workflows tell the user what happened.
//
// Workflows never print anything themselves. They hand a Notification to
// whatever Notifier they were built with:
// - ConsoleNotifier in the real binary (prints to the terminal)
// - a recording notifier in tests, so we can assert exactly which
//   notifications fired
// =============================================================================

mod console;

pub use console::ConsoleNotifier;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Normal, informational message
    #[default]
    Default,
    /// Error message
    Destructive,
}

/// A structured, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    /// A destructive notification titled "Error".
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
