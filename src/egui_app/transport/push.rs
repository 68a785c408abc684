//! Push Channel
//!
//! Persistent server-sent event subscription. The channel runs on its own
//! thread with its own tokio runtime, decodes `new_message`,
//! `messages_read` and `update_conversations` events and forwards them to the
//! synchronization controller's queue as [`SyncEvent::Push`]. Connection
//! changes are forwarded as [`SyncEvent::Channel`].
//!
//! The channel is opened once at startup and closed once at teardown. A
//! dropped connection is re-established with exponential backoff; a clean
//! close from the server ends the subscription.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::sync::oneshot;
use uuid::Uuid;

use super::http::SESSION_HEADER;
use super::sse::SseDecoder;
use crate::egui_app::sync::SyncEvent;
use crate::shared::config::AppConfig;
use crate::shared::messaging::PushEvent;

const INITIAL_RECONNECT_DELAY: Duration = Duration::from_millis(1000);
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(30);

/// Subscription status reported by the channel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Retrying,
    Error(String),
}

impl ChannelStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ChannelStatus::Connected)
    }
}

/// Handle to the running push subscription
#[derive(Debug)]
pub struct PushChannel {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PushChannel {
    /// Open the channel. Events are delivered to `events` until
    /// [`PushChannel::disconnect`] is called or the handle is dropped.
    pub fn subscribe(config: &AppConfig, session_id: Uuid, events: Sender<SyncEvent>) -> Self {
        let url = config.push_endpoint(&["events"]);
        let connect_timeout = config.request_timeout;
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let thread = thread::spawn(move || {
            run_subscription(url, session_id, connect_timeout, events, shutdown_rx);
        });

        Self {
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Close the channel and wait for its thread to finish
    pub fn disconnect(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            tracing::info!("[PUSH] Disconnecting push channel");
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::error!("[PUSH] Push channel thread panicked");
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for PushChannel {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn run_subscription(
    url: Url,
    session_id: Uuid,
    connect_timeout: Duration,
    events: Sender<SyncEvent>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("[PUSH] Failed to create runtime for push channel: {}", e);
            let _ = events.send(SyncEvent::Channel(ChannelStatus::Error(format!("runtime: {}", e))));
            return;
        }
    };

    rt.block_on(async {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("[PUSH] Push channel closed by client");
            }
            _ = subscription_loop(&url, session_id, connect_timeout, &events) => {}
        }
    });

    let _ = events.send(SyncEvent::Channel(ChannelStatus::Disconnected));
}

/// Connect, stream, and reconnect on failure. Returns on a clean close from
/// the server or when the controller's queue is gone.
async fn subscription_loop(url: &Url, session_id: Uuid, connect_timeout: Duration, events: &Sender<SyncEvent>) {
    let client = match Client::builder().connect_timeout(connect_timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("[PUSH] Failed to build HTTP client: {}", e);
            let _ = events.send(SyncEvent::Channel(ChannelStatus::Error(format!("client: {}", e))));
            return;
        }
    };

    let mut reconnect_delay = INITIAL_RECONNECT_DELAY;

    loop {
        tracing::info!("[PUSH] Subscribing to {}", url);
        if events.send(SyncEvent::Channel(ChannelStatus::Connecting)).is_err() {
            return;
        }

        let request = client
            .get(url.clone())
            .header("Accept", "text/event-stream")
            .header(SESSION_HEADER, session_id.to_string());

        let response = match request.send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::error!("[PUSH] Subscription failed with status: {} (will retry)", resp.status());
                report_retry(events, format!("http: {}", resp.status()));
                tokio::time::sleep(reconnect_delay).await;
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }
            Err(e) => {
                tracing::warn!("[PUSH] Failed to reach push channel (will retry): {}", e);
                report_retry(events, format!("network: {}", e));
                tokio::time::sleep(reconnect_delay).await;
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }
        };

        tracing::info!("[PUSH] Push channel established");
        if events.send(SyncEvent::Channel(ChannelStatus::Connected)).is_err() {
            return;
        }
        reconnect_delay = INITIAL_RECONNECT_DELAY;

        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut connection_active = true;

        while let Some(chunk_result) = stream.next().await {
            let chunk = match chunk_result {
                Ok(chunk) => chunk,
                Err(e) => {
                    tracing::error!("[PUSH] Error reading from push stream: {}", e);
                    connection_active = false;
                    let _ = events.send(SyncEvent::Channel(ChannelStatus::Error(format!("stream: {}", e))));
                    break;
                }
            };

            for frame in decoder.push(&chunk) {
                match PushEvent::decode(&frame.event, &frame.data) {
                    Ok(Some(event)) => {
                        tracing::debug!(
                            "[PUSH] Received {} event for {}",
                            event.name(),
                            event.conversation_id().unwrap_or("all conversations")
                        );
                        if events.send(SyncEvent::Push(event)).is_err() {
                            tracing::debug!("[PUSH] Event queue closed, stopping subscription");
                            return;
                        }
                    }
                    Ok(None) => tracing::warn!("[PUSH] Ignoring unknown event: {}", frame.event),
                    Err(e) => tracing::warn!("[PUSH] Failed to decode {} event: {}", frame.event, e),
                }
            }
        }

        if connection_active {
            tracing::info!("[PUSH] Push stream closed by server");
            return;
        }

        tracing::warn!("[PUSH] Push connection lost, will reconnect");
        let _ = events.send(SyncEvent::Channel(ChannelStatus::Retrying));
        tokio::time::sleep(reconnect_delay).await;
        reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
    }
}

fn report_retry(events: &Sender<SyncEvent>, reason: String) {
    let _ = events.send(SyncEvent::Channel(ChannelStatus::Error(reason)));
    let _ = events.send(SyncEvent::Channel(ChannelStatus::Retrying));
}
