//! Theme Styling Functions
//!
//! Helpers applying the inbox colors consistently across the views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::MAIN_CHAT_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BUBBLE_BORDER);
    style.visuals.panel_fill = colors::SIDEBAR_BG;

    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BAR_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::CHAT_LIST_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::same(0))
}

pub fn sidebar_header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_HEADER_BG)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

pub fn chat_area_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::MAIN_CHAT_BG)
        .inner_margin(egui::Margin::same(0))
}

pub fn chat_header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CHAT_HEADER_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

pub fn input_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INPUT_BAR_BG)
        .stroke(Stroke::new(1.0, colors::INPUT_BAR_BORDER))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Red banner shown above the views while a session error is set
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Frame for a message bubble; the tail corner sits on the sender's side
pub fn bubble_frame(is_outgoing: bool) -> egui::Frame {
    let (fill, corner_radius) = if is_outgoing {
        (colors::BUBBLE_OUTGOING, CornerRadius { nw: 10, ne: 10, sw: 10, se: 2 })
    } else {
        (colors::BUBBLE_INCOMING, CornerRadius { nw: 10, ne: 10, sw: 2, se: 10 })
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::BUBBLE_BORDER))
        .corner_radius(corner_radius)
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Frame for a conversation list item
pub fn chat_item_frame(is_selected: bool, is_hovered: bool) -> egui::Frame {
    let bg_color = if is_selected {
        colors::CHAT_LIST_SELECTED
    } else if is_hovered {
        colors::CHAT_LIST_HOVER
    } else {
        Color32::TRANSPARENT
    };

    egui::Frame::new()
        .fill(bg_color)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Frame for the attachment panel above the input bar
pub fn attachment_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CHAT_HEADER_BG)
        .stroke(Stroke::new(1.0, colors::INPUT_BAR_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
}
