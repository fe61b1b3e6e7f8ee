//! Adapter contract and delivery onto the race channel.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::lookup::request::LookupRequest;
use crate::lookup::types::{Address, LookupError, LookupOutcome, Source};
use crate::observability::metrics;
use crate::race::scope::{CancelScope, ScopeEnd};

/// A single external postal code lookup.
///
/// Implementations perform exactly one query per call and never retry.
/// Cancellation is handled by [`deliver`], which drops the future when the
/// race scope ends.
#[async_trait]
pub trait LookupAdapter: Send + Sync {
    fn source(&self) -> Source;

    async fn fetch(&self, request: &LookupRequest) -> Result<Address, LookupError>;
}

/// Run one adapter against `scope` and deliver its outcome on `tx`.
///
/// Writes at most once. Nothing is delivered when the scope ended before the
/// adapter finished, or when the adapter failed at the transport level after
/// the scope ended. When the channel slot is already taken the outcome is
/// dropped.
pub async fn deliver(
    adapter: Arc<dyn LookupAdapter>,
    request: LookupRequest,
    scope: CancelScope,
    tx: mpsc::Sender<LookupOutcome>,
) {
    let source = adapter.source();
    tracing::info!(source = %source, cep = %request, "Starting lookup");

    let result = tokio::select! {
        result = adapter.fetch(&request) => result,
        end = scope.ended() => {
            tracing::debug!(source = %source, cause = ?end, "Lookup aborted, scope ended");
            metrics::record_attempt(source, "aborted");
            return;
        }
    };

    if let Some(end) = suppression(&result, &scope) {
        tracing::debug!(
            source = %source,
            cause = ?end,
            "Suppressing transport error after scope end"
        );
        metrics::record_attempt(source, "suppressed");
        return;
    }

    match &result {
        Ok(_) => metrics::record_attempt(source, "success"),
        Err(e) => metrics::record_attempt(source, e.kind()),
    }

    let outcome = LookupOutcome::from_result(source, result);
    match tx.try_send(outcome) {
        Ok(()) => tracing::debug!(source = %source, "Lookup outcome delivered"),
        Err(TrySendError::Full(_)) => {
            tracing::debug!(source = %source, "Race already has an outcome, dropping");
        }
        Err(TrySendError::Closed(_)) => {
            tracing::debug!(source = %source, "Race already finished, dropping");
        }
    }
}

/// Scope end cause when `result` is a transport error raised after the scope
/// ended; such errors are dropped instead of delivered.
fn suppression(result: &Result<Address, LookupError>, scope: &CancelScope) -> Option<ScopeEnd> {
    match result {
        Err(LookupError::Transport(_)) => scope.end_cause(),
        _ => None,
    }
}
