use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run-wide context handed to every collaborator call
///
/// Holds the single cancellation signal of a report run. Clones share the
/// same flag, so a handle kept by the caller can cancel a run in progress.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    cancelled: Arc<AtomicBool>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every holder of this context
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
