//! Lookup subsystem.
//!
//! # Data Flow
//! ```text
//! LookupRequest (postal code)
//!     → adapter.rs (LookupAdapter::fetch, one query per provider)
//!     → deliver() (bound to the race scope, writes at most once)
//!     → LookupOutcome on the race channel
//! ```
//!
//! # Design Decisions
//! - Adapters know nothing about each other or about the coordinator
//! - Errors are terminal for the adapter; no retries
//! - Transport errors after the scope ended are swallowed

pub mod adapter;
pub mod request;
pub mod types;

pub use adapter::{deliver, LookupAdapter};
pub use request::{LookupRequest, RequestError};
pub use types::{Address, LookupError, LookupOutcome, Source};
