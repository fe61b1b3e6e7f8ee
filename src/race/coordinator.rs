//! Race coordinator.
//!
//! # States
//! ```text
//! Idle → Racing → Resolved(Success) | Resolved(Failure) | TimedOut
//! ```
//! Terminal states are final. A coordinator holds no state between races.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::lookup::{deliver, LookupAdapter, LookupRequest};
use crate::observability::metrics;
use crate::race::result::RaceResult;
use crate::race::scope::CancelScope;

/// Default bound for a race.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Races a set of adapters and commits to the first outcome delivered.
#[derive(Clone)]
pub struct RaceCoordinator {
    adapters: Vec<Arc<dyn LookupAdapter>>,
    timeout: Duration,
}

impl RaceCoordinator {
    pub fn new(adapters: Vec<Arc<dyn LookupAdapter>>, timeout: Duration) -> Self {
        Self { adapters, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve `request` with whichever adapter completes first.
    ///
    /// The first outcome wins even if it is a failure. Returns
    /// [`RaceResult::TimedOut`] when nothing arrives within the timeout.
    pub async fn race(&self, request: &LookupRequest) -> RaceResult {
        let race_id = Uuid::new_v4();
        let span = tracing::info_span!("race", %race_id, cep = %request);
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &LookupRequest) -> RaceResult {
        let started = Instant::now();
        let scope = CancelScope::with_timeout(self.timeout);
        let _guard = scope.guard();

        // One slot, so the first finisher never waits on the coordinator.
        let (tx, mut rx) = mpsc::channel(1);

        tracing::info!(
            adapters = self.adapters.len(),
            timeout_ms = self.timeout.as_millis() as u64,
            "Racing lookups"
        );

        for adapter in &self.adapters {
            let task = deliver(adapter.clone(), request.clone(), scope.clone(), tx.clone());
            tokio::spawn(task.in_current_span());
        }
        drop(tx);

        let result = tokio::select! {
            Some(outcome) = rx.recv() => {
                scope.cancel();
                tracing::info!(
                    source = %outcome.source(),
                    success = outcome.is_success(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Race resolved"
                );
                RaceResult::Resolved(outcome)
            }
            _ = scope.expired() => {
                tracing::warn!(timeout_ms = self.timeout.as_millis() as u64, "Race timed out");
                RaceResult::TimedOut { after: self.timeout }
            }
        };

        metrics::record_race(result.label(), started.elapsed());
        result
    }
}
