//! Chat Header Component
//!
//! Back button, avatar, name and address of the active conversation.

use eframe::egui;
use super::chat_item::avatar;
use crate::egui_app::sync::SyncController;
use crate::egui_app::theme::{colors, styles};

/// Render the chat header
pub fn render(ui: &mut egui::Ui, controller: &mut SyncController) {
    let Some(conversation) = controller.active_conversation().cloned() else {
        return;
    };

    let mut go_back = false;
    styles::chat_header_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to conversations").clicked() {
                go_back = true;
            }
            ui.add_space(4.0);
            avatar(ui, conversation.avatar_initial(), 18.0);
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&conversation.display_name)
                        .color(colors::TEXT_DARK)
                        .strong()
                        .size(16.0),
                );
                ui.colored_label(colors::TEXT_SECONDARY, format!("+{}", conversation.id));
            });

            if controller.is_sending() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Sending...");
                });
            }
        });
    });

    if go_back {
        controller.select(None);
    }
}
