// src/navigate/mod.rs
// =============================================================================
// The navigation boundary.
//
// There are three different things "go somewhere" can mean, and they must
// never be mixed up:
// - Route:      in-app route change (no reload, client state survives)
// - Document:   full document navigation, leaves the application
// - NewContext: open the destination in a new window/tab
//
// The workflows only describe WHICH navigation they want; a Navigator
// decides how to carry it out (launch a browser, print, record in tests).
//
// Submodules:
// - route: maps an incoming path onto the routing surface (home vs code)
// - system: SystemNavigator, the real implementation for the CLI
// =============================================================================

mod route;
mod system;

pub use route::Route;
pub use system::SystemNavigator;

/// Path of the application root (the submission page).
pub const ROOT: &str = "/";

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// In-app route change to a path such as "/"
    Route(String),
    /// Replace the current document with an external URL
    Document(String),
    /// Open an external URL in a new browsing context
    NewContext(String),
}

impl Navigation {
    pub fn root() -> Self {
        Navigation::Route(ROOT.to_string())
    }
}

/// How a resolved destination should be followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Redirect the current document (the resolver)
    ReplaceDocument,
    /// Leave the current document alone (the submitter's follow action)
    NewContext,
}

impl NavigationMode {
    pub fn to_navigation(self, destination: String) -> Navigation {
        match self {
            NavigationMode::ReplaceDocument => Navigation::Document(destination),
            NavigationMode::NewContext => Navigation::NewContext(destination),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: Navigation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_stay_distinguishable() {
        let url = "https://example.com".to_string();
        assert_eq!(
            NavigationMode::ReplaceDocument.to_navigation(url.clone()),
            Navigation::Document(url.clone())
        );
        assert_eq!(
            NavigationMode::NewContext.to_navigation(url.clone()),
            Navigation::NewContext(url)
        );
        assert_eq!(Navigation::root(), Navigation::Route("/".to_string()));
    }
}
