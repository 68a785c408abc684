//! Main Messaging Layout
//!
//! Error banner on top, sidebar on the left and chat area on the right.

use eframe::egui;
use super::chat_area::render_chat_area;
use super::sidebar::render_sidebar;
use super::state::MessagingState;
use crate::egui_app::sync::SyncController;
use crate::egui_app::theme::{colors, styles};

/// Sidebar width in pixels
const SIDEBAR_WIDTH: f32 = 320.0;

/// Render the main messaging view
pub fn render_messaging_view(ui: &mut egui::Ui, state: &mut MessagingState, controller: &mut SyncController) {
    state.apply_send_outcomes(controller);

    render_error_banner(ui, controller);

    let available_size = ui.available_size();
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(SIDEBAR_WIDTH, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::sidebar_frame().show(ui, |ui| {
                    ui.set_min_size(egui::vec2(SIDEBAR_WIDTH, available_size.y));
                    render_sidebar(ui, controller);
                });
            },
        );

        ui.add(egui::Separator::default().vertical().spacing(0.0));

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::chat_area_frame().show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    render_chat_area(ui, state, controller);
                });
            },
        );
    });
}

/// Session error with Dismiss and Retry actions. Stays until one of them is
/// used or a later success clears it.
fn render_error_banner(ui: &mut egui::Ui, controller: &mut SyncController) {
    let Some(error) = controller.error().map(|e| e.to_string()) else {
        return;
    };

    let mut dismiss = false;
    let mut retry = false;
    styles::error_banner_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::ERROR, format!("⚠ {}", error));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                dismiss = ui.button("Dismiss").clicked();
                retry = ui.button("Retry").clicked();
            });
        });
    });

    if retry {
        controller.dismiss_error();
        controller.retry();
    } else if dismiss {
        controller.dismiss_error();
    }
}
