//! egui Native Desktop App Module
//!
//! Desktop client for the business messaging inbox, built with egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Configuration from the environment
//! - **`transport`** - HTTP request/response calls and the push channel
//! - **`store`** - Conversation and message stores
//! - **`sync`** - Synchronization controller applying completions and push
//!   events to the stores in order
//! - **`messaging`** - Messaging views (sidebar, chat area, input bar)
//! - **`theme`** - Colors and widget styles
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Application entry point
//! ├── config.rs     - Environment configuration
//! ├── transport/    - Transport trait, HTTP client, push channel, SSE decoder
//! ├── store/        - ConversationStore, MessageStore
//! ├── sync/         - SyncController, SyncEvent, job runners
//! ├── messaging/    - Views and components
//! └── theme/        - Colors and styles
//! ```

pub mod config;
pub mod messaging;
pub mod store;
pub mod sync;
pub mod theme;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use store::{ConversationStore, MessageStore};
pub use sync::{SyncController, SyncEvent};
pub use transport::{HttpTransport, PushChannel, Transport};
