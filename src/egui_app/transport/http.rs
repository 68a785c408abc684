//! HTTP Transport
//!
//! Implements [`Transport`] with reqwest. Each call runs on a tokio runtime
//! owned by the transport, so callers on plain worker threads can block on it.

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use uuid::Uuid;

use super::Transport;
use crate::shared::config::AppConfig;
use crate::shared::messaging::{Conversation, JoinRoomRequest, Message, MessageDraft};
use crate::shared::SyncError;

/// Header carrying the per-session id shared with the push channel
pub const SESSION_HEADER: &str = "X-Session-Id";

/// HTTP transport client
pub struct HttpTransport {
    config: AppConfig,
    client: Client,
    runtime: Runtime,
    session_id: Uuid,
}

impl HttpTransport {
    pub fn new(config: AppConfig) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("chatdesk-http")
            .enable_all()
            .build()
            .map_err(|e| SyncError::network(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            config,
            client,
            runtime,
            session_id: Uuid::new_v4(),
        })
    }

    /// Session id the push channel must subscribe with, so room joins apply
    /// to the right stream
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SyncError> {
        tracing::debug!("[HTTP] GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Map a non-success response to a `SyncError`. 400 and 422 mean the server
/// rejected the payload shape.
async fn check_status(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Err(SyncError::validation(
            format!("Server rejected message: {} - {}", status, error_text),
        )),
        _ => Err(SyncError::http_status(
            status.as_u16(),
            format!("Request failed: {} - {}", status, error_text),
        )),
    }
}

impl Transport for HttpTransport {
    fn list_conversations(&self) -> Result<Vec<Conversation>, SyncError> {
        let url = self.config.api_endpoint(&["messages", "conversations"]);
        self.runtime.block_on(self.get_json(url))
    }

    fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, SyncError> {
        let url = self.config.api_endpoint(&["messages", conversation_id]);
        self.runtime.block_on(self.get_json(url))
    }

    fn send_message(&self, draft: &MessageDraft) -> Result<Message, SyncError> {
        let url = self.config.api_endpoint(&["messages"]);
        tracing::info!(
            "[HTTP] Sending {} message to {}",
            draft.payload.kind().as_str(),
            draft.conversation_id
        );

        self.runtime.block_on(async {
            let response = self.client.post(url).json(draft).send().await?;
            let response = check_status(response).await?;
            Ok::<Message, SyncError>(response.json::<Message>().await?)
        })
    }

    fn join_conversation_room(&self, conversation_id: &str) -> Result<(), SyncError> {
        let url = self.config.push_endpoint(&["events", "join"]);
        let body = JoinRoomRequest {
            conversation_id: conversation_id.to_string(),
        };

        self.runtime.block_on(async {
            let response = self
                .client
                .post(url)
                .header(SESSION_HEADER, self.session_id.to_string())
                .json(&body)
                .send()
                .await?;
            check_status(response).await?;
            Ok::<(), SyncError>(())
        })
    }
}
