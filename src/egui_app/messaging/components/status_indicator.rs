//! Delivery status ticks and the push channel status dot

use eframe::egui;
use crate::egui_app::theme::colors;
use crate::egui_app::transport::ChannelStatus;
use crate::shared::messaging::MessageStatus;

/// Tick glyph and color for an outgoing message
pub fn ticks(status: Option<MessageStatus>) -> (&'static str, egui::Color32) {
    match status {
        Some(MessageStatus::Pending) | None => ("🕓", colors::TIMESTAMP),
        Some(MessageStatus::Sent) => ("✓", colors::TIMESTAMP),
        Some(MessageStatus::Delivered) => ("✓✓", colors::TIMESTAMP),
        Some(MessageStatus::Read) => ("✓✓", colors::READ_TICK),
    }
}

pub fn render_ticks(ui: &mut egui::Ui, status: Option<MessageStatus>) {
    let (glyph, color) = ticks(status);
    ui.label(egui::RichText::new(glyph).color(color).small());
}

/// Small colored dot with a hover text describing the channel
pub fn render_channel_dot(ui: &mut egui::Ui, status: &ChannelStatus) {
    let (color, text) = match status {
        ChannelStatus::Connected => (colors::STATUS_ONLINE, "Live updates connected".to_string()),
        ChannelStatus::Connecting => (colors::STATUS_PENDING, "Connecting to live updates".to_string()),
        ChannelStatus::Retrying => (colors::STATUS_PENDING, "Reconnecting to live updates".to_string()),
        ChannelStatus::Error(reason) => (colors::ERROR, format!("Live updates failed: {}", reason)),
        ChannelStatus::Disconnected => (colors::STATUS_OFFLINE, "Live updates disconnected".to_string()),
    };

    let (rect, response) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 5.0, color);
    response.on_hover_text(text);
}
