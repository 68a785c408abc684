//! Conversation Data Structure
//!
//! A conversation is the thread the business has with one counterpart. Its id
//! is the counterpart's address.

use serde::{Deserialize, Serialize};

use super::timestamp;

/// Represents a conversation in the chat list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    /// Counterpart address
    #[serde(alias = "_id")]
    pub id: String,
    /// Name shown in the chat list
    #[serde(alias = "profile_name")]
    pub display_name: String,
    /// Preview text of the last message
    #[serde(default)]
    pub last_message: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub last_message_time: Option<i64>,
    /// Number of unread messages
    #[serde(default)]
    pub unread_count: u32,
}

impl Conversation {
    /// Create a new conversation with no messages
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            last_message: None,
            last_message_time: None,
            unread_count: 0,
        }
    }

    /// Get a preview of the last message (first `max_chars` characters)
    pub fn preview(&self, max_chars: usize) -> String {
        let text = match self.last_message.as_deref() {
            Some(text) => text,
            None => return String::new(),
        };
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let mut preview: String = text.chars().take(max_chars).collect();
            preview.push_str("...");
            preview
        }
    }

    /// Get avatar initial (first letter of the display name, or of the id)
    pub fn avatar_initial(&self) -> char {
        self.display_name
            .chars()
            .chain(self.id.chars())
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}
