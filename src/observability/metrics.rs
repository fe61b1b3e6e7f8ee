//! Metrics collection.
//!
//! # Metrics
//! - `cep_lookup_attempts_total` (counter): adapter attempts by source, result
//! - `cep_race_total` (counter): races by outcome (success, failure, timeout)
//! - `cep_race_duration_seconds` (histogram): wall-clock time per race

use std::time::Duration;
use crate::lookup::Source;

pub fn record_attempt(source: Source, result: &'static str) {
    metrics::counter!(
        "cep_lookup_attempts_total",
        "source" => source.as_str(),
        "result" => result
    )
    .increment(1);
}

pub fn record_race(outcome: &'static str, elapsed: Duration) {
    metrics::counter!("cep_race_total", "outcome" => outcome).increment(1);
    metrics::histogram!("cep_race_duration_seconds").record(elapsed.as_secs_f64());
}
