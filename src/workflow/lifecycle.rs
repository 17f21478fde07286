// src/workflow/lifecycle.rs
// =============================================================================
// Lifecycle: "is anybody still looking at this workflow?"
//
// In-flight requests are never aborted. If the owner of a workflow goes away
// (Ctrl-C, the command finished, a test dropped it) the request can still
// settle afterwards. Once dispose() has been called, every effect the late
// response would have had (state update, notification, navigation) is
// dropped instead of applied.
//
// Clones share the same flag, so a Lifecycle can be handed to whoever needs
// to check it.
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    disposed: Arc<AtomicBool>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    // Runs `f` only while the workflow is still alive
    //
    // `effect` names what is being dropped, for the debug log.
    pub fn run<T>(&self, effect: &str, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_disposed() {
            debug!(effect, "workflow disposed, dropping effect");
            return None;
        }
        Some(f())
    }
}
