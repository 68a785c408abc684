//! Chatdesk - Main Library
//!
//! Chatdesk is a desktop client for a business messaging inbox. It lists the
//! conversations a business number has with its customers, shows the message
//! log of the selected conversation, sends text, image, document and contact
//! messages, and reflects updates the server pushes in real time.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with the server
//!   - Conversations, messages and their tagged payloads
//!   - Push events
//!   - Error and configuration types
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - HTTP transport and the push channel
//!   - Conversation and message stores
//!   - The synchronization controller that keeps both stores consistent
//!   - The messaging views
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chatdesk::egui_app::config::Config;
//! use chatdesk::egui_app::sync::{SyncController, ThreadRunner};
//! use chatdesk::egui_app::transport::HttpTransport;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let transport = Arc::new(HttpTransport::new(config.app().clone())?);
//! let mut controller = SyncController::new(config.app().clone(), transport, Box::new(ThreadRunner));
//! controller.start();
//! // Every frame:
//! controller.pump();
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Store state is owned by the controller and mutated on a single thread.
//! Network calls and the push channel run on worker threads and report back
//! through an `mpsc` queue that the controller drains in order.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
