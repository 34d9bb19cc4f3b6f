//! Cooperative cancellation for CPU-bound work.
//!
//! The matching pipeline never blocks, so cancellation is a flag polled
//! between units of work rather than an interrupt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ClipmatchError, ClipmatchResult};

/// Shared cancellation flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Return `Cancelled` if cancellation was requested.
    pub fn check(&self, stage: &'static str) -> ClipmatchResult<()> {
        if self.is_cancelled() {
            return Err(ClipmatchError::cancelled(stage));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check("align").is_ok());
    }

    #[test]
    fn test_cancel_is_visible_through_clones() {
        let token = CancellationToken::new();
        let worker_view = token.clone();
        token.cancel();

        assert!(worker_view.is_cancelled());
        let err = worker_view.check("align").unwrap_err();
        assert!(err.is_cancelled());
    }
}
