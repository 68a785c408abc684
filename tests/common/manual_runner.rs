//! Job runner for deterministic replay
//!
//! Jobs execute as soon as they are dispatched (the fake transport answers
//! instantly), but their events are held back. The test decides when, and in
//! which order, the controller sees each completion.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use chatdesk::egui_app::sync::{Job, JobRunner, SyncController, SyncEvent};

#[derive(Clone, Default)]
pub struct ManualRunner {
    held: Arc<Mutex<VecDeque<SyncEvent>>>,
}

impl ManualRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.held.lock().unwrap().len()
    }

    pub fn take_next(&self) -> Option<SyncEvent> {
        self.held.lock().unwrap().pop_front()
    }

    /// Remove the first held event matching `predicate`
    pub fn take_where<P>(&self, predicate: P) -> Option<SyncEvent>
    where
        P: Fn(&SyncEvent) -> bool,
    {
        let mut held = self.held.lock().unwrap();
        let index = held.iter().position(predicate)?;
        held.remove(index)
    }

    /// Remove the held message fetch for `conversation_id`
    pub fn take_fetch(&self, conversation_id: &str) -> Option<SyncEvent> {
        self.take_where(|event| {
            matches!(event, SyncEvent::MessagesLoaded { ticket, .. } if ticket.conversation_id == conversation_id)
        })
    }

    pub fn take_conversations(&self) -> Option<SyncEvent> {
        self.take_where(|event| matches!(event, SyncEvent::ConversationsLoaded { .. }))
    }

    pub fn take_send(&self) -> Option<SyncEvent> {
        self.take_where(|event| matches!(event, SyncEvent::MessageSent { .. }))
    }

    /// Deliver held events in dispatch order, including the ones they cause,
    /// until nothing is left
    pub fn deliver_all(&self, controller: &mut SyncController) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.take_next() {
            controller.handle(event);
            delivered += 1;
        }
        delivered
    }
}

impl JobRunner for ManualRunner {
    fn run(&self, job: Job, _events: Sender<SyncEvent>) {
        let event = job();
        self.held.lock().unwrap().push_back(event);
    }
}
