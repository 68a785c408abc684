//! Common test utilities and helpers
//!
//! - `fake_transport` - scripted in-memory `Transport`
//! - `manual_runner` - job runner that holds completions until the test
//!   delivers them, in any order
//! - `fixtures` - conversations, messages and a ready-made harness

#![allow(dead_code)]

pub mod fake_transport;
pub mod fixtures;
pub mod manual_runner;

pub use fake_transport::*;
pub use fixtures::*;
pub use manual_runner::*;
