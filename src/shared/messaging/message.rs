//! Chat Message Data Structure
//!
//! Represents a message in a conversation. The kind-specific content lives in
//! [`MessagePayload`], which is flattened into the message on the wire and
//! tagged by its `type` field:
//!
//! ```json
//! { "id": "m1", "conversation_id": "919876543210", "sender": "918329446654",
//!   "timestamp": 1718000000, "status": "sent", "type": "text", "body": "hi" }
//! ```

use serde::{Deserialize, Serialize};

use super::conversation::Conversation;
use super::timestamp;

/// Delivery status of an outgoing message.
///
/// Variants are ordered by progress, so a status can only ever be advanced
/// with [`MessageStatus::advanced_to`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Pending,
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Pending => "pending",
            MessageStatus::Sent => "sent",
            MessageStatus::Delivered => "delivered",
            MessageStatus::Read => "read",
        }
    }

    /// The later of `self` and `next`; never moves backwards
    pub fn advanced_to(self, next: MessageStatus) -> MessageStatus {
        self.max(next)
    }
}

/// Kind of message content, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    Image,
    Document,
    Contact,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Document => "document",
            MessageKind::Contact => "contact",
        }
    }
}

/// Message content, one variant per kind.
///
/// Serialized flat and tagged by `type`. Decoding also accepts the nested
/// shapes older servers store (`media`, `document` and `contacts` objects)
/// and treats a missing `type` as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "PayloadWire")]
pub enum MessagePayload {
    /// Plain text message
    Text { body: String },
    /// Image referenced by URL
    Image {
        media_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// File attachment
    Document {
        filename: String,
        mimetype: String,
        size_bytes: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Shared contact card
    Contact { name: String, phone: String },
}

impl MessagePayload {
    pub fn text(body: impl Into<String>) -> Self {
        MessagePayload::Text { body: body.into() }
    }

    /// Image payload; a blank caption is dropped
    pub fn image(media_url: impl Into<String>, caption: impl Into<String>) -> Self {
        MessagePayload::Image {
            media_url: media_url.into(),
            caption: non_blank(caption.into()),
        }
    }

    /// Document payload; a blank caption is dropped
    pub fn document(
        filename: impl Into<String>,
        mimetype: impl Into<String>,
        size_bytes: u64,
        caption: impl Into<String>,
    ) -> Self {
        MessagePayload::Document {
            filename: filename.into(),
            mimetype: mimetype.into(),
            size_bytes,
            caption: non_blank(caption.into()),
        }
    }

    pub fn contact(name: impl Into<String>, phone: impl Into<String>) -> Self {
        MessagePayload::Contact {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            MessagePayload::Text { .. } => MessageKind::Text,
            MessagePayload::Image { .. } => MessageKind::Image,
            MessagePayload::Document { .. } => MessageKind::Document,
            MessagePayload::Contact { .. } => MessageKind::Contact,
        }
    }

    /// Text shown as the conversation preview in the chat list
    pub fn preview_text(&self) -> String {
        match self {
            MessagePayload::Text { body } => body.clone(),
            MessagePayload::Image { .. } => "📷 Image".to_string(),
            MessagePayload::Document { .. } => "📄 Document".to_string(),
            MessagePayload::Contact { .. } => "👤 Contact".to_string(),
        }
    }

    /// Text messages with nothing but whitespace are never sent
    pub fn is_blank_text(&self) -> bool {
        matches!(self, MessagePayload::Text { body } if body.trim().is_empty())
    }

    /// Check the fields the server requires for each kind
    pub fn validate(&self) -> Result<(), crate::shared::SyncError> {
        use crate::shared::SyncError;

        match self {
            MessagePayload::Text { body } if body.trim().is_empty() => {
                Err(SyncError::validation("text messages need a body"))
            }
            MessagePayload::Image { media_url, .. } if media_url.trim().is_empty() => {
                Err(SyncError::validation("image messages need a media URL"))
            }
            MessagePayload::Document { filename, .. } if filename.trim().is_empty() => {
                Err(SyncError::validation("document messages need a filename"))
            }
            MessagePayload::Contact { name, phone }
                if name.trim().is_empty() || phone.trim().is_empty() =>
            {
                Err(SyncError::validation("contact messages need a name and a phone number"))
            }
            _ => Ok(()),
        }
    }
}

/// Every payload field any server version sends
#[derive(Deserialize)]
struct PayloadWire {
    #[serde(rename = "type")]
    kind: Option<String>,
    body: Option<String>,
    caption: Option<String>,
    media_url: Option<String>,
    media: Option<MediaWire>,
    filename: Option<String>,
    mimetype: Option<String>,
    size_bytes: Option<u64>,
    document: Option<DocumentWire>,
    name: Option<String>,
    phone: Option<String>,
    contacts: Option<ContactWire>,
}

#[derive(Deserialize)]
struct MediaWire {
    url: String,
    caption: Option<String>,
}

#[derive(Deserialize)]
struct DocumentWire {
    filename: String,
    mimetype: Option<String>,
    #[serde(alias = "size")]
    size_bytes: Option<u64>,
}

#[derive(Deserialize)]
struct ContactWire {
    name: String,
    phone: String,
}

impl TryFrom<PayloadWire> for MessagePayload {
    type Error = String;

    fn try_from(wire: PayloadWire) -> Result<Self, Self::Error> {
        match wire.kind.as_deref().unwrap_or("text") {
            "text" => Ok(MessagePayload::Text {
                body: wire.body.unwrap_or_default(),
            }),
            "image" => {
                let (nested_url, nested_caption) = match wire.media {
                    Some(media) => (Some(media.url), media.caption),
                    None => (None, None),
                };
                let media_url = wire
                    .media_url
                    .or(nested_url)
                    .ok_or("image message without a media URL")?;
                Ok(MessagePayload::Image {
                    media_url,
                    caption: wire.caption.or(nested_caption).and_then(non_blank),
                })
            }
            "document" => {
                let (nested_name, nested_mimetype, nested_size) = match wire.document {
                    Some(doc) => (Some(doc.filename), doc.mimetype, doc.size_bytes),
                    None => (None, None, None),
                };
                let filename = wire
                    .filename
                    .or(nested_name)
                    .ok_or("document message without a filename")?;
                Ok(MessagePayload::Document {
                    filename,
                    mimetype: wire
                        .mimetype
                        .or(nested_mimetype)
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                    size_bytes: wire.size_bytes.or(nested_size).unwrap_or(0),
                    caption: wire.caption.and_then(non_blank),
                })
            }
            "contact" => {
                let (name, phone) = match (wire.name, wire.phone, wire.contacts) {
                    (Some(name), Some(phone), _) => (name, phone),
                    (_, _, Some(contact)) => (contact.name, contact.phone),
                    _ => return Err("contact message without a name and phone".to_string()),
                };
                Ok(MessagePayload::Contact { name, phone })
            }
            other => Err(format!("unknown message type: {}", other)),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Represents a chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Server-assigned id, unique within a conversation
    #[serde(alias = "_id")]
    pub id: String,
    /// Conversation (counterpart address) this message belongs to
    #[serde(alias = "wa_id")]
    pub conversation_id: String,
    /// Address of the sender
    #[serde(alias = "from")]
    pub sender: String,
    /// Seconds since the Unix epoch
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: i64,
    /// Delivery status; only meaningful for outgoing messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    /// Kind-specific content
    #[serde(flatten)]
    pub payload: MessagePayload,
}

impl Message {
    /// A message is outgoing when someone other than the counterpart sent it
    pub fn is_outgoing(&self) -> bool {
        self.sender != self.conversation_id
    }

    pub fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    pub fn preview_text(&self) -> String {
        self.payload.preview_text()
    }

    /// Advance the status, ignoring any attempt to move it backwards.
    /// Returns whether the status changed.
    pub fn advance_status(&mut self, next: MessageStatus) -> bool {
        let advanced = match self.status {
            Some(current) => current.advanced_to(next),
            None => next,
        };
        if self.status == Some(advanced) {
            return false;
        }
        self.status = Some(advanced);
        true
    }
}

/// Outgoing message before the server has confirmed it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDraft {
    pub conversation_id: String,
    /// Display name of the conversation, forwarded for the server's records
    pub display_name: String,
    /// Always the configured business identity
    pub sender: String,
    #[serde(flatten)]
    pub payload: MessagePayload,
}

impl MessageDraft {
    pub fn new(conversation: &Conversation, sender: impl Into<String>, payload: MessagePayload) -> Self {
        Self {
            conversation_id: conversation.id.clone(),
            display_name: conversation.display_name.clone(),
            sender: sender.into(),
            payload,
        }
    }
}
