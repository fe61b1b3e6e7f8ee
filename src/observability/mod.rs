//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Coordinator and adapters produce:
//!     → logging.rs (structured events, race span with race_id)
//!     → metrics.rs (attempt and race counters, race duration)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only the lookup result
//! - Metrics go through the `metrics` facade; embedders install the recorder

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
