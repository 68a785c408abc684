//! Chat Item Component
//!
//! One conversation in the sidebar: avatar initial, name, preview, time of
//! the last message and the unread badge.

use eframe::egui;
use crate::egui_app::messaging::format::format_clock;
use crate::egui_app::theme::{colors, styles};
use crate::shared::messaging::Conversation;

/// Characters of the last message shown in the list
pub const PREVIEW_CHARS: usize = 30;

/// Render a single conversation item.
/// Returns true if the item was clicked
pub fn render(ui: &mut egui::Ui, conversation: &Conversation, is_selected: bool) -> bool {
    let id = ui.make_persistent_id(("chat_item", &conversation.id));
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);

    let response = styles::chat_item_frame(is_selected, was_hovered).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            avatar(ui, conversation.avatar_initial(), 20.0);
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&conversation.display_name)
                            .color(colors::TEXT_LIGHT)
                            .strong(),
                    );
                    if let Some(time) = conversation.last_message_time {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let color = if conversation.unread_count > 0 {
                                colors::UNREAD_BADGE
                            } else {
                                colors::TEXT_LIGHT_MUTED
                            };
                            ui.colored_label(color, format_clock(time));
                        });
                    }
                });

                ui.horizontal(|ui| {
                    let preview = conversation.preview(PREVIEW_CHARS);
                    if preview.is_empty() {
                        ui.colored_label(colors::TEXT_LIGHT_MUTED, "No messages yet");
                    } else {
                        ui.colored_label(colors::TEXT_LIGHT_MUTED, preview);
                    }
                    if conversation.unread_count > 0 {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            unread_badge(ui, conversation.unread_count);
                        });
                    }
                });
            });
        });
    });

    let response = response.response.interact(egui::Sense::click());
    let hovered = response.hovered();
    if hovered != was_hovered {
        ui.ctx().data_mut(|d| d.insert_temp(id, hovered));
    }
    if hovered {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

/// Circle with the conversation's initial
pub fn avatar(ui: &mut egui::Ui, initial: char, radius: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, colors::AVATAR_BG);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(radius),
        egui::Color32::WHITE,
    );
}

/// Green pill with the unread count
pub fn unread_badge(ui: &mut egui::Ui, count: u32) {
    egui::Frame::new()
        .fill(colors::UNREAD_BADGE)
        .corner_radius(egui::CornerRadius::same(9))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(count.to_string())
                    .color(colors::SIDEBAR_BG)
                    .small()
                    .strong(),
            );
        });
}
