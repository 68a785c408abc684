//! Messaging Module
//!
//! This module contains all the data structures exchanged with the server:
//!
//! - `Conversation` - a thread with one counterpart, keyed by their address
//! - `Message` - a message with a payload tagged by its kind
//! - `MessageDraft` - an outgoing message before the server confirms it
//! - `PushEvent` - events delivered over the push channel
//!
//! # Usage
//!
//! ```rust
//! use chatdesk::shared::messaging::{Conversation, Message, MessagePayload, PushEvent};
//! ```

pub mod conversation;
pub mod event;
pub mod message;
mod timestamp;

// Re-export all types
pub use conversation::Conversation;
pub use event::{JoinRoomRequest, PushEvent, ReadReceipt};
pub use message::{Message, MessageDraft, MessageKind, MessagePayload, MessageStatus};
