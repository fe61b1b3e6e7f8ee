//! Postal code (CEP) lookup that races two providers.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │               RACE COORDINATOR               │
//!   LookupRequest  │                                              │
//!   ───────────────┼─▶ CancelScope (deadline) ──┬──────────────┐  │
//!                  │                            ▼              ▼  │
//!                  │                     ┌───────────┐  ┌─────────┐│
//!                  │                     │ BrasilAPI │  │ ViaCEP  ││──▶ HTTP
//!                  │                     └─────┬─────┘  └────┬────┘│
//!                  │                           └──▶ chan(1) ◀┘     │
//!   RaceResult     │                                 │            │
//!   ◀──────────────┼──── first outcome | deadline ◀──┘            │
//!                  └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod lookup;
pub mod observability;
pub mod providers;
pub mod race;

pub use config::AppConfig;
pub use lookup::{Address, LookupAdapter, LookupError, LookupOutcome, LookupRequest, Source};
pub use race::{RaceCoordinator, RaceError, RaceResult, Resolved};
