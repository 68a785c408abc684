//! Messaging Module
//!
//! Views of the business inbox. The views read the stores through the
//! synchronization controller and call back into it for every user action.

pub mod chat_area;
pub mod components;
pub mod format;
pub mod main_layout;
pub mod sidebar;
pub mod state;

pub use main_layout::render_messaging_view;
pub use state::MessagingState;
