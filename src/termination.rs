//! Stop conditions for long-running searches.
//!
//! Exhaustive search has factorial worst-case runtime. A [`StopCondition`]
//! combines an optional wall-clock deadline with an optional
//! [`CancellationToken`]; searches poll it and return the best candidate
//! found so far once it fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A cloneable flag that requests cancellation of a running search.
///
/// # Examples
///
/// ```
/// use geo_route::termination::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`CancellationToken::cancel`] was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// When a search should give up and return its best candidate.
#[derive(Debug, Clone, Default)]
pub struct StopCondition {
    deadline: Option<Instant>,
    token: Option<CancellationToken>,
}

impl StopCondition {
    /// A condition that never fires.
    pub fn never() -> Self {
        Self::default()
    }

    /// Fires once `deadline` has passed. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Fires `limit` after now.
    pub fn with_time_limit(self, limit: Duration) -> Self {
        self.with_deadline(Instant::now() + limit)
    }

    /// Fires once `token` is cancelled.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    /// The configured deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if the search should stop now.
    pub fn is_stopped(&self) -> bool {
        if self.token.as_ref().is_some_and(|t| t.is_cancelled()) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
