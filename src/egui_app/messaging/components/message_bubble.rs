//! Message Bubble Component
//!
//! Displays a single message, laid out per payload kind, with its time and
//! (for outgoing messages) the delivery ticks.

use eframe::egui;
use super::status_indicator;
use crate::egui_app::messaging::format::{format_clock, format_size_kb};
use crate::egui_app::theme::{colors, styles};
use crate::shared::messaging::{Message, MessagePayload};

/// Render a message bubble
pub fn render(ui: &mut egui::Ui, message: &Message) {
    let is_outgoing = message.is_outgoing();
    let align = if is_outgoing { egui::Align::RIGHT } else { egui::Align::LEFT };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let max_width = ui.available_width() * 0.7;

        ui.allocate_ui_with_layout(egui::vec2(max_width, 0.0), egui::Layout::top_down(align), |ui| {
            styles::bubble_frame(is_outgoing).show(ui, |ui| {
                render_payload(ui, &message.payload);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format_clock(message.timestamp))
                            .color(colors::TIMESTAMP)
                            .small(),
                    );
                    if is_outgoing {
                        status_indicator::render_ticks(ui, message.status);
                    }
                });
            });
        });
    });

    ui.add_space(4.0);
}

fn render_payload(ui: &mut egui::Ui, payload: &MessagePayload) {
    match payload {
        MessagePayload::Text { body } => {
            ui.label(egui::RichText::new(body).color(colors::TEXT_DARK));
        }
        MessagePayload::Image { media_url, caption } => {
            ui.label(egui::RichText::new("📷 Image").color(colors::TEXT_DARK).strong());
            ui.hyperlink_to(media_url.as_str(), media_url.as_str());
            render_caption(ui, caption.as_deref());
        }
        MessagePayload::Document {
            filename,
            mimetype,
            size_bytes,
            caption,
        } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("📄").size(22.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(filename).color(colors::TEXT_DARK).strong());
                    ui.label(
                        egui::RichText::new(format!("{} · {}", format_size_kb(*size_bytes), mimetype))
                            .color(colors::TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
            render_caption(ui, caption.as_deref());
        }
        MessagePayload::Contact { name, phone } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").size(22.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(name).color(colors::TEXT_DARK).strong());
                    ui.label(egui::RichText::new(phone).color(colors::TEXT_SECONDARY));
                });
            });
        }
    }
}

fn render_caption(ui: &mut egui::Ui, caption: Option<&str>) {
    if let Some(caption) = caption {
        ui.label(egui::RichText::new(caption).color(colors::TEXT_DARK));
    }
}
