//! Cooperative cancellation for long-running analysis work

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::AnalysisError;

/// Shared cancellation flag
///
/// Clones observe the same flag. The algorithms check it at their hot
/// points: edge-list iteration, every BFS dequeue, and the top of every
/// clique-search recursion. Once signaled, in-flight work aborts with
/// `AnalysisError::Canceled` and no partial result escapes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    canceled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; visible to every clone of this token
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }

    /// Bail out with `AnalysisError::Canceled` if the flag is set
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.is_canceled() {
            Err(AnalysisError::Canceled)
        } else {
            Ok(())
        }
    }
}
