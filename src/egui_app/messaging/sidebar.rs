//! Sidebar Component
//!
//! Header with the business identity, total unread count and push channel
//! status, followed by the conversation list.

use eframe::egui;
use super::components::{chat_item, status_indicator};
use crate::egui_app::sync::SyncController;
use crate::egui_app::theme::{colors, styles};

/// Render the sidebar
pub fn render_sidebar(ui: &mut egui::Ui, controller: &mut SyncController) {
    styles::sidebar_header_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("Chats").color(colors::TEXT_LIGHT));
            let total_unread = controller.conversations().total_unread();
            if total_unread > 0 {
                chat_item::unread_badge(ui, total_unread);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                status_indicator::render_channel_dot(ui, controller.channel_status());
                ui.colored_label(colors::TEXT_LIGHT_MUTED, format!("+{}", controller.config().business_id));
            });
        });
    });

    if controller.is_loading_conversations() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.colored_label(colors::TEXT_LIGHT_MUTED, "Loading conversations...");
        });
        return;
    }

    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if controller.conversations().is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(colors::TEXT_LIGHT_MUTED, "No conversations");
                });
                return;
            }

            let active_id = controller.conversations().active_id();
            for conversation in controller.conversations().iter() {
                let is_selected = active_id == Some(conversation.id.as_str());
                if chat_item::render(ui, conversation, is_selected) {
                    clicked = Some(conversation.id.clone());
                }
                ui.add(egui::Separator::default().spacing(0.0));
            }
        });

    if let Some(id) = clicked {
        controller.select(Some(id));
    }
}
