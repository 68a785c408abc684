//! Conversation Store
//!
//! Holds the conversation list in server order and the active selection.

use std::collections::HashSet;

use crate::shared::messaging::Conversation;

#[derive(Debug, Default, Clone)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active_id: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the list after a full fetch.
    ///
    /// The selection is kept even when the new list no longer contains it.
    /// A repeated id keeps its first occurrence.
    pub fn replace_all(&mut self, list: Vec<Conversation>) {
        let mut seen = HashSet::with_capacity(list.len());
        let mut conversations = Vec::with_capacity(list.len());
        for conversation in list {
            if seen.insert(conversation.id.clone()) {
                conversations.push(conversation);
            } else {
                tracing::warn!("[SYNC] Dropping duplicate conversation {} from list", conversation.id);
            }
        }
        self.conversations = conversations;
    }

    /// Update the preview of a conversation after a new message.
    ///
    /// `unread_count` goes up by one only for incoming messages in a
    /// conversation that is not being viewed. Returns false, without
    /// touching anything, when the conversation is unknown.
    pub fn apply_new_message_preview(
        &mut self,
        conversation_id: &str,
        preview_text: &str,
        timestamp: i64,
        is_incoming: bool,
    ) -> bool {
        let is_active = self.active_id.as_deref() == Some(conversation_id);
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) else {
            return false;
        };

        conversation.last_message = Some(preview_text.to_string());
        conversation.last_message_time = Some(timestamp);
        if is_incoming && !is_active {
            conversation.unread_count = conversation.unread_count.saturating_add(1);
        }
        true
    }

    /// Set the active selection
    pub fn select(&mut self, conversation_id: Option<String>) {
        self.active_id = conversation_id;
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, conversation_id: &str) -> bool {
        self.active_id.as_deref() == Some(conversation_id)
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    pub fn first(&self) -> Option<&Conversation> {
        self.conversations.first()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Sum of unread counts across the list
    pub fn total_unread(&self) -> u32 {
        self.conversations
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.unread_count))
    }
}
