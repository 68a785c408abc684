/**
 * Push Events
 *
 * Events the server delivers over the push channel, and the request the client
 * sends to join a conversation room. Each event arrives as a name plus a JSON
 * data payload; `PushEvent::decode` turns that pair into a typed event.
 */
use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::shared::SyncError;

/// Wire name of the new-message event
pub const NEW_MESSAGE: &str = "new_message";
/// Wire name of the read-receipt event
pub const MESSAGES_READ: &str = "messages_read";
/// Wire name of the conversation-list-changed event
pub const UPDATE_CONVERSATIONS: &str = "update_conversations";

/// Event delivered by the server over the push channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// A message was created in some conversation (ours or the counterpart's)
    NewMessage(Message),
    /// The counterpart read the messages in a conversation
    MessagesRead { conversation_id: String },
    /// The conversation list changed server-side
    ConversationsChanged,
}

/// Payload of `messages_read`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadReceipt {
    #[serde(alias = "wa_id")]
    pub conversation_id: String,
}

/// Body of the client's `join_conversation` request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinRoomRequest {
    pub conversation_id: String,
}

impl PushEvent {
    /// Decode a named event. Unknown names yield `Ok(None)`.
    pub fn decode(name: &str, data: &str) -> Result<Option<Self>, SyncError> {
        let event = match name {
            NEW_MESSAGE => PushEvent::NewMessage(serde_json::from_str(data)?),
            MESSAGES_READ => {
                let receipt: ReadReceipt = serde_json::from_str(data)?;
                PushEvent::MessagesRead {
                    conversation_id: receipt.conversation_id,
                }
            }
            UPDATE_CONVERSATIONS => PushEvent::ConversationsChanged,
            _ => return Ok(None),
        };
        Ok(Some(event))
    }

    /// Wire name of this event
    pub fn name(&self) -> &'static str {
        match self {
            PushEvent::NewMessage(_) => NEW_MESSAGE,
            PushEvent::MessagesRead { .. } => MESSAGES_READ,
            PushEvent::ConversationsChanged => UPDATE_CONVERSATIONS,
        }
    }

    /// Conversation the event concerns, if it names one
    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            PushEvent::NewMessage(message) => Some(&message.conversation_id),
            PushEvent::MessagesRead { conversation_id } => Some(conversation_id),
            PushEvent::ConversationsChanged => None,
        }
    }
}
