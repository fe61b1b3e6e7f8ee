//! Race subsystem.
//!
//! # Data Flow
//! ```text
//! race(request)
//!     → scope.rs (CancelScope with deadline, guard ends it on return)
//!     → spawn one deliver() task per adapter, sharing a one-slot channel
//!     → select: first outcome | deadline
//!     → cancel scope, loser aborts its in-flight request
//!     → result.rs (RaceResult)
//! ```
//!
//! # Design Decisions
//! - First channel write wins; no shared mutable result state, no locks
//! - Completion order decides, not success: a fast failure beats a slow success
//! - Simultaneous completions resolve by channel arrival order

pub mod coordinator;
pub mod result;
pub mod scope;

pub use coordinator::{RaceCoordinator, DEFAULT_TIMEOUT};
pub use result::{RaceError, RaceResult, Resolved};
pub use scope::{CancelScope, ScopeEnd, ScopeGuard};
