//! Input Bar Component
//!
//! Text input with send button, a quick emoji row and the attachment panel
//! for image, document and contact messages.

use eframe::egui;
use crate::egui_app::messaging::state::{AttachmentKind, MessagingState};
use crate::egui_app::sync::SyncController;
use crate::egui_app::theme::{colors, styles};

/// Emojis offered in the quick row
pub const QUICK_EMOJIS: [&str; 8] = ["😀", "😂", "😍", "👍", "🙏", "🎉", "❤", "👋"];

/// Render the input bar
pub fn render(ui: &mut egui::Ui, state: &mut MessagingState, controller: &mut SyncController) {
    if state.show_attachment_panel {
        render_attachment_panel(ui, state, controller);
        ui.add_space(4.0);
    }

    styles::input_bar_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        if state.show_emoji_row {
            ui.horizontal(|ui| {
                for emoji in QUICK_EMOJIS {
                    if ui.button(emoji).clicked() {
                        state.insert_emoji(emoji);
                    }
                }
            });
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            if ui.button("📎").on_hover_text("Attach").clicked() {
                state.toggle_attachment_panel();
            }
            if ui.button("😀").on_hover_text("Emoji").clicked() {
                state.show_emoji_row = !state.show_emoji_row;
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.message_input)
                    .hint_text("Type a message")
                    .desired_width(ui.available_width() - 40.0),
            );

            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.lost_focus() && enter_pressed {
                state.send_text(controller);
                response.request_focus();
            }

            let send_enabled = !state.message_input.trim().is_empty();
            ui.add_enabled_ui(send_enabled, |ui| {
                if ui.button("➤").clicked() {
                    state.send_text(controller);
                }
            });
        });
    });
}

fn render_attachment_panel(ui: &mut egui::Ui, state: &mut MessagingState, controller: &mut SyncController) {
    styles::attachment_panel_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            for kind in AttachmentKind::ALL {
                ui.selectable_value(&mut state.attachment.kind, kind, kind.label());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").clicked() {
                    state.toggle_attachment_panel();
                }
            });
        });
        ui.add_space(6.0);

        let draft = &mut state.attachment;
        egui::Grid::new("attachment_fields").num_columns(2).show(ui, |ui| {
            match draft.kind {
                AttachmentKind::Image => {
                    ui.label("Image URL");
                    ui.text_edit_singleline(&mut draft.image_url);
                    ui.end_row();
                    ui.label("Caption");
                    ui.text_edit_singleline(&mut draft.caption);
                    ui.end_row();
                }
                AttachmentKind::Document => {
                    ui.label("File path");
                    ui.text_edit_singleline(&mut draft.document_path);
                    ui.end_row();
                    ui.label("Caption");
                    ui.text_edit_singleline(&mut draft.caption);
                    ui.end_row();
                }
                AttachmentKind::Contact => {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut draft.contact_name);
                    ui.end_row();
                    ui.label("Phone");
                    ui.text_edit_singleline(&mut draft.contact_phone);
                    ui.end_row();
                }
            }
        });

        if let Some(error) = &state.attachment_error {
            ui.colored_label(colors::ERROR, error);
        }

        ui.add_space(6.0);
        if ui.button("Send attachment").clicked() {
            state.send_attachment(controller);
        }
    });
}
