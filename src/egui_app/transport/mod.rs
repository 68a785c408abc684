//! Transport Client
//!
//! Request/response calls to the messaging server and the persistent push
//! channel.
//!
//! - **`Transport`** - the blocking request/response seam the synchronization
//!   controller calls from worker threads
//! - **`HttpTransport`** - `Transport` over HTTP with reqwest
//! - **`PushChannel`** - server-sent event subscription feeding push events
//!   into the controller's queue
//! - **`sse`** - incremental decoder for the event stream

pub mod http;
pub mod push;
pub mod sse;

pub use http::HttpTransport;
pub use push::{ChannelStatus, PushChannel};

use crate::shared::messaging::{Conversation, Message, MessageDraft};
use crate::shared::SyncError;

/// Request/response operations against the messaging server.
///
/// Calls block the calling thread; the controller only invokes them from
/// worker threads.
pub trait Transport: Send + Sync {
    /// `GET /messages/conversations`
    fn list_conversations(&self) -> Result<Vec<Conversation>, SyncError>;

    /// `GET /messages/{conversation_id}`; an empty list is valid
    fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, SyncError>;

    /// `POST /messages`; returns the server-confirmed message
    fn send_message(&self, draft: &MessageDraft) -> Result<Message, SyncError>;

    /// Declare interest in a conversation so the server scopes push events
    /// to this session. Idempotent; there is no leave.
    fn join_conversation_room(&self, conversation_id: &str) -> Result<(), SyncError>;
}
