//! Message List Component
//!
//! Displays the message log of the active conversation with day separators.

use eframe::egui;
use super::message_bubble;
use crate::egui_app::messaging::format::format_day;
use crate::egui_app::store::MessageStore;
use crate::egui_app::sync::LoadPhase;
use crate::egui_app::theme::colors;

/// Render the message list
pub fn render(ui: &mut egui::Ui, messages: &MessageStore, phase: &LoadPhase) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if phase.is_fetching() && messages.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading messages...");
                });
            } else if messages.is_empty() {
                render_empty_state(ui);
            } else {
                let mut last_day: Option<String> = None;
                for message in messages.iter() {
                    let day = format_day(message.timestamp);
                    if last_day.as_deref() != Some(day.as_str()) {
                        render_day_separator(ui, &day);
                        last_day = Some(day);
                    }
                    message_bubble::render(ui, message);
                }
            }

            ui.add_space(8.0);
        });
}

fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::TEXT_SECONDARY, "No messages yet");
    });
}

fn render_day_separator(ui: &mut egui::Ui, day: &str) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(colors::CHAT_HEADER_BG)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(day).color(colors::TEXT_SECONDARY).small());
            });
    });
    ui.add_space(8.0);
}
