//! Job execution
//!
//! Transport calls block, so the controller never makes them itself. It wraps
//! each call in a [`Job`] and hands it to a [`JobRunner`], which decides where
//! the call runs and delivers the resulting event to the queue.

use std::sync::mpsc::Sender;
use std::thread;

use super::event::SyncEvent;

/// A blocking unit of work that produces exactly one event
pub type Job = Box<dyn FnOnce() -> SyncEvent + Send + 'static>;

pub trait JobRunner {
    fn run(&self, job: Job, events: Sender<SyncEvent>);
}

/// Runs every job on its own short-lived thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRunner;

impl JobRunner for ThreadRunner {
    fn run(&self, job: Job, events: Sender<SyncEvent>) {
        thread::spawn(move || {
            let event = job();
            if events.send(event).is_err() {
                tracing::debug!("[SYNC] Event queue closed before job completed");
            }
        });
    }
}

/// Runs jobs on the calling thread. The event is queued, not applied, so
/// ordering still goes through `pump`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineRunner;

impl JobRunner for InlineRunner {
    fn run(&self, job: Job, events: Sender<SyncEvent>) {
        let _ = events.send(job());
    }
}
