//! Theme Module
//!
//! Color constants and frame builders for the messaging views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::sidebar_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_LIGHT, "Chats");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
