//! Color Constants for the Inbox Theme
//!
//! Dark green sidebar, light chat background, green outgoing bubbles.

use eframe::egui::Color32;

/// Sidebar background
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x11, 0x1B, 0x21);

/// Sidebar header background
pub const SIDEBAR_HEADER_BG: Color32 = Color32::from_rgb(0x20, 0x2C, 0x33);

/// Chat list item, hovered
pub const CHAT_LIST_HOVER: Color32 = Color32::from_rgb(0x20, 0x2C, 0x33);

/// Chat list item, selected
pub const CHAT_LIST_SELECTED: Color32 = Color32::from_rgb(0x2A, 0x39, 0x42);

/// Main chat background
pub const MAIN_CHAT_BG: Color32 = Color32::from_rgb(0xEF, 0xEA, 0xE2);

/// Chat header background
pub const CHAT_HEADER_BG: Color32 = Color32::from_rgb(0xF0, 0xF2, 0xF5);

/// Outgoing message bubble
pub const BUBBLE_OUTGOING: Color32 = Color32::from_rgb(0xD9, 0xFD, 0xD3);

/// Incoming message bubble
pub const BUBBLE_INCOMING: Color32 = Color32::WHITE;

/// Bubble border
pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD7, 0xDB);

/// Input bar background
pub const INPUT_BAR_BG: Color32 = Color32::from_rgb(0xF0, 0xF2, 0xF5);

/// Input bar border
pub const INPUT_BAR_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD7, 0xDB);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE9, 0xED, 0xEF);

/// Muted text on dark backgrounds
pub const TEXT_LIGHT_MUTED: Color32 = Color32::from_rgb(0x86, 0x96, 0xA0);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x1B, 0x21);

/// Secondary text on light backgrounds
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x78, 0x81);

/// Timestamps inside bubbles
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x66, 0x78, 0x81);

/// Brand accent
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xA8, 0x84);

/// Avatar circle fill
pub const AVATAR_BG: Color32 = Color32::from_rgb(0x6A, 0x7F, 0x8A);

/// Unread badge background
pub const UNREAD_BADGE: Color32 = Color32::from_rgb(0x25, 0xD3, 0x66);

/// Read receipt ticks
pub const READ_TICK: Color32 = Color32::from_rgb(0x53, 0xBD, 0xEB);

/// Push channel connected
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x25, 0xD3, 0x66);

/// Push channel connecting or retrying
pub const STATUS_PENDING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Push channel disconnected
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFD, 0xE8, 0xE8);

/// Error text
pub const ERROR: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);

/// Primary button
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x00, 0xA8, 0x84);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x2A, 0x39, 0x42);
