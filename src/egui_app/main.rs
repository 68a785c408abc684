/**
 * Chatdesk - Main Entry Point
 *
 * Desktop client for the business messaging inbox. Wires the HTTP transport,
 * the push channel and the synchronization controller together and drives
 * the controller from the egui frame loop.
 */
use std::sync::Arc;

use chatdesk::egui_app::config::Config;
use chatdesk::egui_app::messaging::{render_messaging_view, MessagingState};
use chatdesk::egui_app::sync::{SyncController, ThreadRunner};
use chatdesk::egui_app::theme::styles;
use chatdesk::egui_app::transport::{HttpTransport, PushChannel};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatdesk=info")))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "[SYNC] API base {}, push channel {}",
        config.app().api_base,
        config.app().push_url
    );

    let transport = Arc::new(HttpTransport::new(config.app().clone())?);
    let mut controller = SyncController::new(config.app().clone(), transport.clone(), Box::new(ThreadRunner));
    controller.attach_push(PushChannel::subscribe(
        config.app(),
        transport.session_id(),
        controller.event_sender(),
    ));
    controller.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Chatdesk - Business Inbox",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(ChatdeskApp::new(controller)))
        }),
    )?;

    Ok(())
}

/// Main application state
struct ChatdeskApp {
    controller: SyncController,
    state: MessagingState,
}

impl ChatdeskApp {
    fn new(controller: SyncController) -> Self {
        Self {
            controller,
            state: MessagingState::new(),
        }
    }
}

impl eframe::App for ChatdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.pump();

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                render_messaging_view(ui, &mut self.state, &mut self.controller);
            });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl Drop for ChatdeskApp {
    fn drop(&mut self) {
        self.controller.shutdown();
    }
}
