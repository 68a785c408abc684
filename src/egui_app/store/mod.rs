//! Client-side stores
//!
//! Plain owned state with a small mutation API. Neither store talks to the
//! network or knows about the other; the synchronization controller decides
//! when each mutation happens.

pub mod conversations;
pub mod messages;

pub use conversations::ConversationStore;
pub use messages::MessageStore;
