//! Messaging UI Components
//!
//! Reusable pieces of the messaging interface.

pub mod chat_header;
pub mod chat_item;
pub mod input_bar;
pub mod message_bubble;
pub mod message_list;
pub mod status_indicator;
