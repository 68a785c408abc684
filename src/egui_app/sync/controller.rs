//! Synchronization Controller
//!
//! Owns both stores and is the only place that mutates them. Three sources
//! feed it: user actions (select, send, retry), completions of transport calls
//! and push events. Transport calls run through a [`JobRunner`]; their results
//! come back as [`SyncEvent`]s on an mpsc queue, and [`SyncController::pump`]
//! applies queued events one at a time, in dequeue order, on the UI thread.
//!
//! Ordering rules:
//! - a message fetch only applies while its [`FetchTicket`] is the newest one
//!   and its conversation is still selected
//! - messages that arrive while a fetch is pending are re-applied on top of
//!   the fetched history
//! - at most one conversation list request is in flight; requests made in the
//!   meantime collapse into a single follow-up
//! - a session error stays until dismissed or until a later success in the
//!   same scope

use std::collections::VecDeque;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use super::event::{FetchTicket, SyncEvent};
use super::runner::JobRunner;
use crate::egui_app::store::{ConversationStore, MessageStore};
use crate::egui_app::transport::{ChannelStatus, PushChannel, Transport};
use crate::shared::config::AppConfig;
use crate::shared::messaging::{Conversation, Message, MessageDraft, MessagePayload, MessageStatus, PushEvent};
use crate::shared::SyncError;

/// Message log state for the active conversation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Fetching(FetchTicket),
    Ready,
    Error(SyncError),
}

impl LoadPhase {
    pub fn is_fetching(&self) -> bool {
        matches!(self, LoadPhase::Fetching(_))
    }
}

/// Operation that produced a session error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorScope {
    Conversations,
    Messages(String),
    Send(String),
    Room(String),
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorScope::Conversations => write!(f, "Failed to load conversations"),
            ErrorScope::Messages(id) => write!(f, "Failed to load messages for {}", id),
            ErrorScope::Send(id) => write!(f, "Failed to send message to {}", id),
            ErrorScope::Room(id) => write!(f, "Failed to join conversation {}", id),
        }
    }
}

/// The last unresolved failure
#[derive(Debug, Clone, PartialEq)]
pub struct SessionError {
    pub scope: ErrorScope,
    pub error: SyncError,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.error)
    }
}

/// Result of one `send`, published for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    pub send_id: u64,
    pub conversation_id: String,
    /// Id of the confirmed message
    pub result: Result<String, SyncError>,
}

pub struct SyncController {
    config: AppConfig,
    transport: Arc<dyn Transport>,
    runner: Box<dyn JobRunner>,
    events_tx: Sender<SyncEvent>,
    events_rx: Receiver<SyncEvent>,
    push: Option<PushChannel>,

    conversations: ConversationStore,
    messages: MessageStore,
    phase: LoadPhase,
    fetch_seq: u64,
    // Live messages applied while the current fetch is pending
    early_arrivals: Vec<Message>,

    refresh_in_flight: bool,
    refresh_queued: bool,
    conversations_loaded: bool,
    conversations_failed: bool,
    // Room whose last join failed
    room_failed: Option<String>,

    send_seq: u64,
    sends_in_flight: usize,
    send_outcomes: VecDeque<SendOutcome>,

    channel_status: ChannelStatus,
    error: Option<SessionError>,
}

impl SyncController {
    pub fn new(config: AppConfig, transport: Arc<dyn Transport>, runner: Box<dyn JobRunner>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            config,
            transport,
            runner,
            events_tx,
            events_rx,
            push: None,
            conversations: ConversationStore::new(),
            messages: MessageStore::new(),
            phase: LoadPhase::Idle,
            fetch_seq: 0,
            early_arrivals: Vec::new(),
            refresh_in_flight: false,
            refresh_queued: false,
            conversations_loaded: false,
            conversations_failed: false,
            room_failed: None,
            send_seq: 0,
            sends_in_flight: 0,
            send_outcomes: VecDeque::new(),
            channel_status: ChannelStatus::Disconnected,
            error: None,
        }
    }

    /// Sender for the controller's event queue. The push channel delivers
    /// through a clone of it.
    pub fn event_sender(&self) -> Sender<SyncEvent> {
        self.events_tx.clone()
    }

    /// Hand the controller the application's push channel so `shutdown`
    /// can close it
    pub fn attach_push(&mut self, channel: PushChannel) {
        if let Some(mut previous) = self.push.replace(channel) {
            tracing::warn!("[SYNC] Replacing an already attached push channel");
            previous.disconnect();
        }
    }

    /// Request the initial conversation list
    pub fn start(&mut self) {
        tracing::info!(
            "[SYNC] Starting session for {} (push channel {})",
            self.config.business_id,
            if self.push.is_some() { "attached" } else { "not attached" }
        );
        self.refresh_conversations();
    }

    /// Change the active conversation.
    ///
    /// The message log is cleared at once. Selecting a conversation joins
    /// its room and starts a fresh fetch, which also makes re-selecting the
    /// active conversation a retry.
    pub fn select(&mut self, conversation_id: Option<String>) {
        self.conversations.select(conversation_id.clone());
        self.messages.clear();
        self.early_arrivals.clear();

        match conversation_id {
            Some(id) => {
                tracing::info!("[SYNC] Selected conversation {}", id);
                self.join_room(&id);
                self.fetch_messages(id);
            }
            None => {
                tracing::info!("[SYNC] Cleared conversation selection");
                self.phase = LoadPhase::Idle;
            }
        }
    }

    /// Manual retry: re-fetch the active conversation, re-join its room if
    /// that failed, and re-request the conversation list if the last request
    /// for it failed. Works the same whether or not the error was dismissed.
    pub fn retry(&mut self) {
        if self.conversations_failed {
            tracing::info!("[SYNC] Retrying conversation list");
            self.refresh_conversations();
        }

        let Some(id) = self.conversations.active_id().map(str::to_owned) else {
            return;
        };
        if self.room_failed.as_deref() == Some(id.as_str()) {
            tracing::info!("[SYNC] Retrying room join for {}", id);
            self.join_room(&id);
        }
        tracing::info!("[SYNC] Retrying messages for {}", id);
        self.fetch_messages(id);
    }

    /// Request the conversation list, or queue one follow-up request if one
    /// is already in flight
    pub fn refresh_conversations(&mut self) {
        if self.refresh_in_flight {
            if !self.refresh_queued {
                tracing::debug!("[SYNC] Conversation refresh already in flight, queuing one more");
            }
            self.refresh_queued = true;
            return;
        }

        self.refresh_in_flight = true;
        let transport = Arc::clone(&self.transport);
        self.runner.run(
            Box::new(move || SyncEvent::ConversationsLoaded {
                result: transport.list_conversations(),
            }),
            self.events_tx.clone(),
        );
    }

    /// Send a message to the active conversation.
    ///
    /// Returns `Ok(None)` when nothing was dispatched (blank text, no active
    /// conversation, or an active id missing from the list), `Ok(Some(id))`
    /// with the id its [`SendOutcome`] will carry, or the validation error
    /// for an incomplete payload.
    pub fn send(&mut self, payload: MessagePayload) -> Result<Option<u64>, SyncError> {
        if payload.is_blank_text() {
            return Ok(None);
        }
        let Some(conversation) = self.conversations.active_conversation() else {
            tracing::warn!("[SYNC] Ignoring send without an active conversation");
            return Ok(None);
        };
        payload.validate()?;

        let draft = MessageDraft::new(conversation, self.config.business_id.clone(), payload);
        self.send_seq += 1;
        self.sends_in_flight += 1;
        let send_id = self.send_seq;
        let conversation_id = draft.conversation_id.clone();

        tracing::info!(
            "[SYNC] Sending {} message #{} to {}",
            draft.payload.kind().as_str(),
            send_id,
            conversation_id
        );

        let transport = Arc::clone(&self.transport);
        self.runner.run(
            Box::new(move || SyncEvent::MessageSent {
                send_id,
                conversation_id,
                result: transport.send_message(&draft),
            }),
            self.events_tx.clone(),
        );
        Ok(Some(send_id))
    }

    /// Apply every queued event. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle(event);
            applied += 1;
        }
        applied
    }

    /// Apply one event
    pub fn handle(&mut self, event: SyncEvent) {
        tracing::debug!("[SYNC] Handling {}", event.label());
        match event {
            SyncEvent::ConversationsLoaded { result } => self.on_conversations_loaded(result),
            SyncEvent::MessagesLoaded { ticket, result } => self.on_messages_loaded(ticket, result),
            SyncEvent::MessageSent {
                send_id,
                conversation_id,
                result,
            } => self.on_message_sent(send_id, conversation_id, result),
            SyncEvent::RoomJoined { conversation_id, result } => self.on_room_joined(conversation_id, result),
            SyncEvent::Push(PushEvent::NewMessage(message)) => self.on_new_message(message),
            SyncEvent::Push(PushEvent::MessagesRead { conversation_id }) => self.on_messages_read(&conversation_id),
            SyncEvent::Push(PushEvent::ConversationsChanged) => self.refresh_conversations(),
            SyncEvent::Channel(status) => {
                if status != self.channel_status {
                    tracing::info!("[PUSH] Channel status: {:?}", status);
                }
                self.channel_status = status;
            }
        }
    }

    /// Close the push channel
    pub fn shutdown(&mut self) {
        if let Some(mut push) = self.push.take() {
            push.disconnect();
        }
        tracing::info!("[SYNC] Session shut down");
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Oldest unread send result
    pub fn take_send_outcome(&mut self) -> Option<SendOutcome> {
        self.send_outcomes.pop_front()
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.conversations.active_conversation()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn channel_status(&self) -> &ChannelStatus {
        &self.channel_status
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn is_sending(&self) -> bool {
        self.sends_in_flight > 0
    }

    pub fn is_loading_conversations(&self) -> bool {
        self.refresh_in_flight && !self.conversations_loaded
    }

    fn join_room(&mut self, conversation_id: &str) {
        let transport = Arc::clone(&self.transport);
        let conversation_id = conversation_id.to_owned();
        self.runner.run(
            Box::new(move || {
                let result = transport.join_conversation_room(&conversation_id);
                SyncEvent::RoomJoined { conversation_id, result }
            }),
            self.events_tx.clone(),
        );
    }

    fn fetch_messages(&mut self, conversation_id: String) {
        self.fetch_seq += 1;
        let ticket = FetchTicket {
            conversation_id,
            seq: self.fetch_seq,
        };
        self.phase = LoadPhase::Fetching(ticket.clone());
        self.early_arrivals.clear();

        tracing::debug!("[SYNC] Fetching messages for {} (#{})", ticket.conversation_id, ticket.seq);
        let transport = Arc::clone(&self.transport);
        self.runner.run(
            Box::new(move || {
                let result = transport.list_messages(&ticket.conversation_id);
                SyncEvent::MessagesLoaded { ticket, result }
            }),
            self.events_tx.clone(),
        );
    }

    fn on_conversations_loaded(&mut self, result: Result<Vec<Conversation>, SyncError>) {
        self.refresh_in_flight = false;

        match result {
            Ok(list) => {
                tracing::info!("[SYNC] Loaded {} conversations", list.len());
                self.conversations.replace_all(list);
                self.conversations_failed = false;
                self.clear_error(&ErrorScope::Conversations);

                let first_load = !self.conversations_loaded;
                self.conversations_loaded = true;
                if first_load && self.config.auto_select_first && self.conversations.active_id().is_none() {
                    if let Some(first_id) = self.conversations.first().map(|c| c.id.clone()) {
                        tracing::info!("[SYNC] Auto-selecting first conversation: {}", first_id);
                        self.select(Some(first_id));
                    }
                }
            }
            Err(e) => {
                self.conversations_failed = true;
                self.set_error(ErrorScope::Conversations, e);
            }
        }

        if self.refresh_queued {
            self.refresh_queued = false;
            self.refresh_conversations();
        }
    }

    fn on_messages_loaded(&mut self, ticket: FetchTicket, result: Result<Vec<Message>, SyncError>) {
        let is_current = matches!(&self.phase, LoadPhase::Fetching(current) if *current == ticket);
        if !is_current || !self.conversations.is_active(&ticket.conversation_id) {
            tracing::warn!(
                "[SYNC] Discarding stale messages for {} (fetch #{})",
                ticket.conversation_id,
                ticket.seq
            );
            return;
        }

        match result {
            Ok(list) => {
                tracing::info!("[SYNC] Loaded {} messages for {}", list.len(), ticket.conversation_id);
                // Live copies may have advanced since they arrived
                let early: Vec<Message> = std::mem::take(&mut self.early_arrivals)
                    .into_iter()
                    .map(|m| self.messages.get(&m.id).cloned().unwrap_or(m))
                    .collect();
                self.messages.replace_all(list);
                for message in early {
                    if let Some(status) = message.status {
                        self.messages.mark_status(|m| m.id == message.id, status);
                    }
                    self.messages.append(message);
                }
                self.phase = LoadPhase::Ready;
                self.clear_error(&ErrorScope::Messages(ticket.conversation_id));
            }
            Err(e) => {
                self.early_arrivals.clear();
                self.phase = LoadPhase::Error(e.clone());
                self.set_error(ErrorScope::Messages(ticket.conversation_id), e);
            }
        }
    }

    fn on_message_sent(&mut self, send_id: u64, conversation_id: String, result: Result<Message, SyncError>) {
        self.sends_in_flight = self.sends_in_flight.saturating_sub(1);

        let result = match result {
            Ok(message) => {
                tracing::info!("[SYNC] Message {} confirmed for {}", message.id, message.conversation_id);
                self.conversations.apply_new_message_preview(
                    &message.conversation_id,
                    &message.preview_text(),
                    message.timestamp,
                    false,
                );
                let message_id = message.id.clone();
                if self.conversations.is_active(&message.conversation_id) {
                    self.append_live(message);
                }
                self.clear_error(&ErrorScope::Send(conversation_id.clone()));
                Ok(message_id)
            }
            Err(e) => {
                self.set_error(ErrorScope::Send(conversation_id.clone()), e.clone());
                Err(e)
            }
        };

        self.send_outcomes.push_back(SendOutcome {
            send_id,
            conversation_id,
            result,
        });
    }

    fn on_room_joined(&mut self, conversation_id: String, result: Result<(), SyncError>) {
        match result {
            Ok(()) => {
                tracing::debug!("[SYNC] Joined room {}", conversation_id);
                if self.room_failed.as_deref() == Some(conversation_id.as_str()) {
                    self.room_failed = None;
                }
                self.clear_error(&ErrorScope::Room(conversation_id));
            }
            Err(e) => {
                self.room_failed = Some(conversation_id.clone());
                self.set_error(ErrorScope::Room(conversation_id), e);
            }
        }
    }

    fn on_new_message(&mut self, message: Message) {
        let conversation_id = message.conversation_id.clone();

        // Echoes of our own sends were already previewed by the send flow
        if message.sender != self.config.business_id {
            let known = self.conversations.apply_new_message_preview(
                &conversation_id,
                &message.preview_text(),
                message.timestamp,
                true,
            );
            if !known {
                tracing::debug!("[SYNC] New message for unlisted conversation {}", conversation_id);
            }
        }

        if self.conversations.is_active(&conversation_id) {
            self.append_live(message);
        }
        self.refresh_conversations();
    }

    /// The receipt names the counterpart, whose messages are now read
    fn on_messages_read(&mut self, conversation_id: &str) {
        if self.conversations.is_active(conversation_id) {
            let changed = self
                .messages
                .mark_status(|m| m.sender == conversation_id, MessageStatus::Read);
            tracing::debug!("[SYNC] Marked {} messages read in {}", changed, conversation_id);
        }
        self.refresh_conversations();
    }

    fn append_live(&mut self, message: Message) {
        if self.phase.is_fetching() {
            self.early_arrivals.push(message.clone());
        }
        let message_id = message.id.clone();
        if !self.messages.append(message) {
            tracing::debug!("[SYNC] Ignoring duplicate message {}", message_id);
        }
    }

    fn set_error(&mut self, scope: ErrorScope, error: SyncError) {
        tracing::error!("[SYNC] {}: {}", scope, error);
        self.error = Some(SessionError { scope, error });
    }

    fn clear_error(&mut self, scope: &ErrorScope) {
        if self.error.as_ref().is_some_and(|e| &e.scope == scope) {
            self.error = None;
        }
    }
}

impl Drop for SyncController {
    fn drop(&mut self) {
        if let Some(mut push) = self.push.take() {
            push.disconnect();
        }
    }
}
