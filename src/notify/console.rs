// src/notify/console.rs
// =============================================================================
// ConsoleNotifier prints notifications to the terminal.
//
// - informational notifications go to stdout
// - destructive ones go to stderr
// - with `stderr_only` everything goes to stderr, which keeps stdout clean
//   for --json output
//
// Every notification is also emitted as a tracing event, so RUST_LOG=info
// shows them in the log stream too.
// =============================================================================

use super::{Notification, Notifier, Variant};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    stderr_only: bool,
}

impl ConsoleNotifier {
    pub fn new(stderr_only: bool) -> Self {
        Self { stderr_only }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = format_notification(&notification);

        match notification.variant {
            Variant::Default => {
                info!(title = %notification.title, "{}", notification.description);
                if self.stderr_only {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            }
            Variant::Destructive => {
                warn!(title = %notification.title, "{}", notification.description);
                eprintln!("{}", line);
            }
        }
    }
}

// Renders one notification as a single terminal line
fn format_notification(notification: &Notification) -> String {
    let icon = match notification.variant {
        Variant::Default => "✅",
        Variant::Destructive => "❌",
    };
    format!("{} {} {}", icon, notification.title, notification.description)
}
