//! Cancellation and deadline carrier passed through provider calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{ProviderError, ProviderOperation};

/// Carries cancellation state and an optional deadline into provider calls.
///
/// Clones share the cancellation flag, so cancelling any clone cancels them
/// all. Whether a provider notices cancellation promptly is up to the
/// provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl ProviderContext {
    /// Context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a context sharing this cancellation flag with a fixed deadline.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some(deadline),
        }
    }

    /// Returns a context that expires after `timeout` from now.
    ///
    /// A timeout too large to represent as an [`Instant`] leaves the context
    /// without a deadline.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Cancels this context and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the context was cancelled or its deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fails with [`ProviderError::Cancelled`] once the context is cancelled.
    ///
    /// Providers call this between units of work for `operation`.
    ///
    /// # Errors
    ///
    /// Returns the cancellation error when [`Self::is_cancelled`] holds.
    pub fn check(&self, operation: ProviderOperation) -> Result<(), ProviderError> {
        if self.is_cancelled() {
            return Err(ProviderError::cancelled(operation));
        }
        Ok(())
    }

    /// Deadline attached to the context, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` when no deadline is set.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Whether both contexts observe the same cancellation flag.
    #[must_use]
    pub fn shares_cancellation_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}
