//! Message Store
//!
//! Ordered message log of the active conversation. Messages are unique by id
//! and kept in arrival order; a second delivery of a known id is ignored.

use std::collections::HashSet;

use crate::shared::messaging::{Message, MessageStatus};

#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
    ids: HashSet<String>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole log with a fetched history
    pub fn replace_all(&mut self, list: Vec<Message>) {
        self.clear();
        for message in list {
            self.append(message);
        }
    }

    /// Append a message unless one with the same id is already present.
    /// Returns whether the message was added.
    pub fn append(&mut self, message: Message) -> bool {
        if !self.ids.insert(message.id.clone()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Advance the status of every message matching `predicate`.
    /// Statuses never move backwards; returns how many messages changed.
    pub fn mark_status<P>(&mut self, predicate: P, new_status: MessageStatus) -> usize
    where
        P: Fn(&Message) -> bool,
    {
        self.messages
            .iter_mut()
            .filter(|m| predicate(m))
            .map(|m| m.advance_status(new_status))
            .filter(|changed| *changed)
            .count()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.ids.clear();
    }

    pub fn contains(&self, message_id: &str) -> bool {
        self.ids.contains(message_id)
    }

    pub fn get(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
