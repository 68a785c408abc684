//! Chat Area Component
//!
//! Header, message list and input bar of the active conversation, or a
//! placeholder when nothing is selected.

use eframe::egui;
use super::components::{chat_header, input_bar, message_list};
use super::state::MessagingState;
use crate::egui_app::sync::SyncController;
use crate::egui_app::theme::colors;

/// Height reserved for the input bar below the message list
const INPUT_BAR_RESERVE: f32 = 60.0;

/// Render the chat area
pub fn render_chat_area(ui: &mut egui::Ui, state: &mut MessagingState, controller: &mut SyncController) {
    if controller.active_conversation().is_some() {
        render_active_chat(ui, state, controller);
    } else if controller.conversations().active_id().is_some() {
        // Selected id dropped out of the list by a refresh
        render_placeholder(ui, "This conversation is no longer available");
    } else {
        render_placeholder(ui, "Select a conversation to start messaging");
    }
}

fn render_active_chat(ui: &mut egui::Ui, state: &mut MessagingState, controller: &mut SyncController) {
    ui.vertical(|ui| {
        chat_header::render(ui, controller);
        ui.add(egui::Separator::default().horizontal().spacing(0.0));

        let mut reserve = INPUT_BAR_RESERVE;
        if state.show_attachment_panel {
            reserve += 150.0;
        }
        if state.show_emoji_row {
            reserve += 30.0;
        }
        let available_height = (ui.available_height() - reserve).max(0.0);
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), available_height),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                message_list::render(ui, controller.messages(), controller.phase());
            },
        );

        input_bar::render(ui, state, controller);
    });
}

fn render_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            egui::Frame::new()
                .fill(colors::BUBBLE_INCOMING)
                .stroke(egui::Stroke::new(1.0, colors::BUBBLE_BORDER))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(colors::TEXT_DARK));
                });
        });
    });
}
