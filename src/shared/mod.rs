//! Shared Module
//!
//! This module contains the types exchanged with the messaging server over
//! HTTP and the push channel, together with the error and configuration types
//! used on both sides of the transport.
//!
//! # Overview
//!
//! The shared module is platform-agnostic and free of UI code. All wire types
//! derive `Serialize`/`Deserialize`.

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

/// Conversation, message and push event types
pub mod messaging;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SyncError;
