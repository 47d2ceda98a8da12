//! Cancellation and deadline context forwarded to hooks and handlers.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Reasons a context is no longer live.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContextError {
    #[error("Context cancelled")]
    Cancelled,

    #[error("Deadline ({deadline}) exceeded")]
    DeadlineExceeded { deadline: DateTime<Utc> },
}

/// Carries cancellation and an optional deadline through a transition.
///
/// The machine never looks inside; it hands the same context to the exit
/// hook, the transition handler, the entry hook and `set_state`. Hooks that
/// do slow work call [`Context::check`] to honour it.
///
/// Contexts derived with [`with_deadline`](Context::with_deadline) or
/// [`with_timeout`](Context::with_timeout) share the cancellation flag of the
/// context they were derived from.
///
/// # Example
///
/// ```rust
/// use lifecycle_fsm::core::{Context, ContextError};
/// use std::time::Duration;
///
/// let ctx = Context::background().with_timeout(Duration::from_secs(30));
/// assert!(ctx.check().is_ok());
///
/// ctx.cancel();
/// assert_eq!(ctx.check(), Err(ContextError::Cancelled));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<DateTime<Utc>>,
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A context with no deadline that is never cancelled unless asked to be.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that expires at `deadline`.
    ///
    /// An earlier deadline already present is kept.
    pub fn with_deadline(&self, deadline: DateTime<Utc>) -> Self {
        let deadline = match self.deadline {
            Some(existing) if existing <= deadline => existing,
            _ => deadline,
        };
        Self {
            deadline: Some(deadline),
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Derive a context that expires `timeout` from now.
    ///
    /// A timeout too large to represent leaves the deadline unchanged.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let deadline = chrono::Duration::from_std(timeout)
            .ok()
            .and_then(|delta| Utc::now().checked_add_signed(delta));
        match deadline {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    /// Cancel this context and every context sharing its flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| {
            deadline
                .signed_duration_since(Utc::now())
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Utc::now() >= deadline)
    }

    /// Fail if the context has been cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Utc::now() >= deadline => {
                Err(ContextError::DeadlineExceeded { deadline })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_live() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(!ctx.is_expired());
        assert!(ctx.deadline().is_none());
        assert!(ctx.remaining().is_none());
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn cancel_propagates_to_derived_contexts() {
        let parent = Context::background();
        let child = parent.with_timeout(Duration::from_secs(60));

        parent.cancel();

        assert!(child.is_cancelled());
        assert_eq!(child.check(), Err(ContextError::Cancelled));
    }

    #[test]
    fn past_deadline_is_expired() {
        let deadline = Utc::now() - chrono::Duration::seconds(5);
        let ctx = Context::background().with_deadline(deadline);

        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
        assert_eq!(ctx.check(), Err(ContextError::DeadlineExceeded { deadline }));
    }

    #[test]
    fn earliest_deadline_wins() {
        let soon = Utc::now() + chrono::Duration::seconds(10);
        let later = soon + chrono::Duration::seconds(50);

        let ctx = Context::background().with_deadline(soon).with_deadline(later);
        assert_eq!(ctx.deadline(), Some(soon));

        let ctx = Context::background().with_deadline(later).with_deadline(soon);
        assert_eq!(ctx.deadline(), Some(soon));
    }

    #[test]
    fn timeout_sets_future_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_secs(30));

        assert!(!ctx.is_expired());
        let remaining = ctx.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(30));
        assert!(remaining > Duration::from_secs(25));
    }

    #[test]
    fn cancelled_wins_over_expired_deadline() {
        let ctx = Context::background().with_deadline(Utc::now() - chrono::Duration::seconds(1));
        ctx.cancel();
        assert_eq!(ctx.check(), Err(ContextError::Cancelled));
    }
}
