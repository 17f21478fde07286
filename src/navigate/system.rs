// src/navigate/system.rs
// =============================================================================
// SystemNavigator carries out navigations for the command-line client.
//
// - Route       -> there is no in-app page to switch to, so we report the
//                  route change on the terminal
// - Document    -> hand the URL to the platform browser
// - NewContext  -> same, but reported as a new window
//
// With `open_browser = false` (--no-browser) URLs are only printed, which is
// what you want over SSH or in scripts.
// =============================================================================

use super::{Navigation, Navigator};
use std::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct SystemNavigator {
    open_browser: bool,
}

impl SystemNavigator {
    pub fn new(open_browser: bool) -> Self {
        Self { open_browser }
    }

    fn launch(&self, url: &str) {
        if !self.open_browser {
            return;
        }

        if let Err(e) = open_in_browser(url) {
            warn!(url, error = %e, "failed to open browser");
            println!("⚠️  Please open this URL in your browser: {}", url);
        }
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&self, navigation: Navigation) {
        debug!(?navigation, "navigating");

        match navigation {
            Navigation::Route(path) => {
                println!("↩️  Back to {}", path);
            }
            Navigation::Document(url) => {
                println!("🔀 Redirecting to {}", url);
                self.launch(&url);
            }
            Navigation::NewContext(url) => {
                println!("🆕 Opening {} in a new window", url);
                self.launch(&url);
            }
        }
    }
}

// Spawns the platform's "open this URL" command without waiting for it
fn open_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}
