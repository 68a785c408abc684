//! Scripted in-memory transport
//!
//! Answers every call from canned data and records what the controller asked
//! for. One-shot failures can be queued per operation.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chatdesk::egui_app::transport::Transport;
use chatdesk::shared::messaging::{Conversation, Message, MessageDraft, MessageStatus};
use chatdesk::shared::SyncError;

#[derive(Default)]
pub struct FakeTransport {
    conversations: Mutex<Vec<Conversation>>,
    conversation_failures: Mutex<VecDeque<SyncError>>,
    messages: Mutex<HashMap<String, Vec<Message>>>,
    message_failures: Mutex<HashMap<String, VecDeque<SyncError>>>,
    send_results: Mutex<VecDeque<Result<Message, SyncError>>>,
    join_failures: Mutex<VecDeque<SyncError>>,
    drafts: Mutex<Vec<MessageDraft>>,
    joins: Mutex<Vec<String>>,
    conversation_calls: AtomicUsize,
    message_calls: AtomicUsize,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_conversations(&self, list: Vec<Conversation>) {
        *self.conversations.lock().unwrap() = list;
    }

    pub fn set_messages(&self, conversation_id: &str, list: Vec<Message>) {
        self.messages
            .lock()
            .unwrap()
            .insert(conversation_id.to_string(), list);
    }

    /// Fail the next `list_conversations` call
    pub fn fail_next_conversations(&self, error: SyncError) {
        self.conversation_failures.lock().unwrap().push_back(error);
    }

    /// Fail the next `list_messages` call for `conversation_id`
    pub fn fail_next_messages(&self, conversation_id: &str, error: SyncError) {
        self.message_failures
            .lock()
            .unwrap()
            .entry(conversation_id.to_string())
            .or_default()
            .push_back(error);
    }

    /// Script the result of the next `send_message`. Unscripted sends echo
    /// the draft back as `sent-<n>`.
    pub fn queue_send_result(&self, result: Result<Message, SyncError>) {
        self.send_results.lock().unwrap().push_back(result);
    }

    pub fn fail_next_join(&self, error: SyncError) {
        self.join_failures.lock().unwrap().push_back(error);
    }

    pub fn drafts(&self) -> Vec<MessageDraft> {
        self.drafts.lock().unwrap().clone()
    }

    pub fn joins(&self) -> Vec<String> {
        self.joins.lock().unwrap().clone()
    }

    pub fn conversation_calls(&self) -> usize {
        self.conversation_calls.load(Ordering::SeqCst)
    }

    pub fn message_calls(&self) -> usize {
        self.message_calls.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    fn list_conversations(&self) -> Result<Vec<Conversation>, SyncError> {
        self.conversation_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.conversation_failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        Ok(self.conversations.lock().unwrap().clone())
    }

    fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, SyncError> {
        self.message_calls.fetch_add(1, Ordering::SeqCst);
        let failure = self
            .message_failures
            .lock()
            .unwrap()
            .get_mut(conversation_id)
            .and_then(|queue| queue.pop_front());
        if let Some(error) = failure {
            return Err(error);
        }
        Ok(self
            .messages
            .lock()
            .unwrap()
            .get(conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    fn send_message(&self, draft: &MessageDraft) -> Result<Message, SyncError> {
        let mut drafts = self.drafts.lock().unwrap();
        drafts.push(draft.clone());
        if let Some(result) = self.send_results.lock().unwrap().pop_front() {
            return result;
        }
        Ok(Message {
            id: format!("sent-{}", drafts.len()),
            conversation_id: draft.conversation_id.clone(),
            sender: draft.sender.clone(),
            timestamp: 1_700_000_000 + drafts.len() as i64,
            status: Some(MessageStatus::Sent),
            payload: draft.payload.clone(),
        })
    }

    fn join_conversation_room(&self, conversation_id: &str) -> Result<(), SyncError> {
        self.joins.lock().unwrap().push(conversation_id.to_string());
        match self.join_failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
