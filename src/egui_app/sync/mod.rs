//! Synchronization
//!
//! The controller that keeps the conversation and message stores consistent
//! while request/response completions and push events arrive in any order.
//!
//! - **`controller`** - [`SyncController`], the single mutation entry point
//! - **`event`** - [`SyncEvent`], one variant per completion or push delivery
//! - **`runner`** - [`JobRunner`], where blocking transport calls execute

pub mod controller;
pub mod event;
pub mod runner;

pub use controller::{ErrorScope, LoadPhase, SendOutcome, SessionError, SyncController};
pub use event::{FetchTicket, SyncEvent};
pub use runner::{InlineRunner, Job, JobRunner, ThreadRunner};
