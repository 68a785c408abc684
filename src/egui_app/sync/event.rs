//! Events applied by the synchronization controller
//!
//! Every completion of a transport call and every push delivery becomes one
//! `SyncEvent` on the controller's queue. Events are applied strictly in the
//! order they are dequeued.

use crate::egui_app::transport::ChannelStatus;
use crate::shared::messaging::{Conversation, Message, PushEvent};
use crate::shared::SyncError;

/// Identifies one message fetch. Only the newest ticket may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub conversation_id: String,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// `list_conversations` finished
    ConversationsLoaded {
        result: Result<Vec<Conversation>, SyncError>,
    },
    /// `list_messages` finished for the fetch identified by `ticket`
    MessagesLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Message>, SyncError>,
    },
    /// `send_message` finished
    MessageSent {
        send_id: u64,
        conversation_id: String,
        result: Result<Message, SyncError>,
    },
    /// `join_conversation_room` finished
    RoomJoined {
        conversation_id: String,
        result: Result<(), SyncError>,
    },
    /// Server push
    Push(PushEvent),
    /// Push channel connection change
    Channel(ChannelStatus),
}

impl SyncEvent {
    /// Short name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            SyncEvent::ConversationsLoaded { .. } => "conversations_loaded",
            SyncEvent::MessagesLoaded { .. } => "messages_loaded",
            SyncEvent::MessageSent { .. } => "message_sent",
            SyncEvent::RoomJoined { .. } => "room_joined",
            SyncEvent::Push(event) => event.name(),
            SyncEvent::Channel(_) => "channel_status",
        }
    }
}
