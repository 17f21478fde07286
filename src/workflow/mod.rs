// src/workflow/mod.rs
// =============================================================================
// The two client-side workflows and what they share.
//
// Submodules:
// - resolver: short code in the path -> navigation
// - submitter: long URL -> short link (plus copy / follow)
// - follow: the lookup-and-navigate step both of them use
// - lifecycle: turns effects of late responses into no-ops after dispose
//
// Neither workflow talks to the outside world directly. Everything goes
// through the injected collaborators (ShortenApi, Notifier, Navigator,
// Clipboard), which is what makes them testable without a network or a
// terminal.
// =============================================================================

mod follow;
mod lifecycle;
mod resolver;
mod submitter;

pub use lifecycle::Lifecycle;
pub use resolver::{Resolution, Resolver};
pub use submitter::Submitter;
