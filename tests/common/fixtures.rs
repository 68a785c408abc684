//! Test fixtures

use std::sync::Arc;

use chatdesk::egui_app::sync::{SyncController, SyncEvent};
use chatdesk::shared::config::AppConfig;
use chatdesk::shared::messaging::{Conversation, Message, MessagePayload, MessageStatus, PushEvent};

use super::fake_transport::FakeTransport;
use super::manual_runner::ManualRunner;

/// Business identity used by every fixture
pub const BUSINESS: &str = "biz";

pub fn test_config(auto_select_first: bool) -> AppConfig {
    AppConfig::builder()
        .api_base("http://127.0.0.1:9/api")
        .push_url("http://127.0.0.1:9")
        .business_id(BUSINESS)
        .auto_select_first(auto_select_first)
        .build()
        .unwrap()
}

pub fn conversation(id: &str, unread_count: u32) -> Conversation {
    let mut conversation = Conversation::new(id, format!("Customer {}", id));
    conversation.unread_count = unread_count;
    conversation
}

/// Text message from the counterpart
pub fn incoming(id: &str, conversation_id: &str, body: &str) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        sender: conversation_id.to_string(),
        timestamp: 1_700_000_000,
        status: None,
        payload: MessagePayload::text(body),
    }
}

/// Text message sent by the business
pub fn outgoing(id: &str, conversation_id: &str, body: &str, status: MessageStatus) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        sender: BUSINESS.to_string(),
        timestamp: 1_700_000_000,
        status: Some(status),
        payload: MessagePayload::text(body),
    }
}

pub fn push(event: PushEvent) -> SyncEvent {
    SyncEvent::Push(event)
}

/// Controller wired to a fake transport and a manual runner
pub struct Harness {
    pub controller: SyncController,
    pub transport: Arc<FakeTransport>,
    pub runner: ManualRunner,
}

impl Harness {
    pub fn new(auto_select_first: bool) -> Self {
        let transport = Arc::new(FakeTransport::new());
        let runner = ManualRunner::new();
        let controller = SyncController::new(
            test_config(auto_select_first),
            transport.clone(),
            Box::new(runner.clone()),
        );
        Self {
            controller,
            transport,
            runner,
        }
    }

    /// Harness with `conversations` loaded and nothing selected
    pub fn with_conversations(conversations: Vec<Conversation>) -> Self {
        let mut harness = Self::new(false);
        harness.transport.set_conversations(conversations);
        harness.controller.start();
        harness.settle();
        harness
    }

    /// Select a conversation and deliver its join and fetch
    pub fn open(&mut self, conversation_id: &str) {
        self.controller.select(Some(conversation_id.to_string()));
        self.settle();
    }

    /// Deliver everything that is held
    pub fn settle(&mut self) -> usize {
        self.runner.deliver_all(&mut self.controller)
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.controller.messages().iter().map(|m| m.id.clone()).collect()
    }

    pub fn unread(&self, conversation_id: &str) -> u32 {
        self.controller
            .conversations()
            .get(conversation_id)
            .map(|c| c.unread_count)
            .unwrap_or_default()
    }
}
