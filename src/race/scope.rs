//! Per-race cancellation scope.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, Instant};

/// Why a scope ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEnd {
    /// Ended early by its owner.
    Cancelled,
    /// The deadline elapsed first.
    DeadlineExceeded,
}

/// Shared cancellation signal with a fixed deadline.
///
/// Cloned into every adapter task of a race. Any holder can observe the scope;
/// only the coordinator calls [`CancelScope::cancel`].
#[derive(Clone)]
pub struct CancelScope {
    inner: Arc<Inner>,
}

struct Inner {
    deadline: Instant,
    tx: watch::Sender<bool>,
}

impl CancelScope {
    /// Create a scope that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                deadline: Instant::now() + timeout,
                tx,
            }),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.inner.deadline
    }

    /// End the scope early. Idempotent.
    pub fn cancel(&self) {
        self.inner.tx.send_if_modified(|cancelled| {
            if *cancelled {
                false
            } else {
                *cancelled = true;
                true
            }
        });
    }

    /// Cause of the end, or `None` while the scope is still active.
    ///
    /// Cancellation wins over expiry when both happened.
    pub fn end_cause(&self) -> Option<ScopeEnd> {
        if *self.inner.tx.borrow() {
            Some(ScopeEnd::Cancelled)
        } else if Instant::now() >= self.inner.deadline {
            Some(ScopeEnd::DeadlineExceeded)
        } else {
            None
        }
    }

    pub fn is_ended(&self) -> bool {
        self.end_cause().is_some()
    }

    /// Resolves once the scope ends, by cancellation or by deadline.
    pub async fn ended(&self) -> ScopeEnd {
        tokio::select! {
            _ = self.cancelled() => ScopeEnd::Cancelled,
            _ = time::sleep_until(self.inner.deadline) => ScopeEnd::DeadlineExceeded,
        }
    }

    async fn cancelled(&self) {
        let mut rx = self.inner.tx.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            // The sender lives in `inner`, so this only fails if the scope is gone.
            if rx.changed().await.is_err() {
                return std::future::pending().await;
            }
        }
    }

    /// Resolves when the deadline elapses, ignoring early cancellation.
    pub async fn expired(&self) {
        time::sleep_until(self.inner.deadline).await
    }

    /// Guard that cancels the scope when dropped.
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            scope: self.clone(),
        }
    }
}

/// Ends its scope on drop, whichever way the owner returns.
pub struct ScopeGuard {
    scope: CancelScope,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
