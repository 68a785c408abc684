//! Messaging View State
//!
//! Input-side state of the messaging views. Conversation and message data
//! live in the synchronization controller; this only holds what the user is
//! typing and which panels are open.

use std::collections::HashMap;
use std::path::Path;

use super::format::guess_mimetype;
use crate::egui_app::sync::SyncController;
use crate::shared::messaging::MessagePayload;
use crate::shared::SyncError;

/// Attachment kinds offered by the attachment panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentKind {
    #[default]
    Image,
    Document,
    Contact,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 3] = [AttachmentKind::Image, AttachmentKind::Document, AttachmentKind::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "📷 Image",
            AttachmentKind::Document => "📄 Document",
            AttachmentKind::Contact => "👤 Contact",
        }
    }
}

/// Fields of the attachment panel
#[derive(Debug, Clone, Default)]
pub struct AttachmentDraft {
    pub kind: AttachmentKind,
    pub image_url: String,
    pub document_path: String,
    pub caption: String,
    pub contact_name: String,
    pub contact_phone: String,
}

impl AttachmentDraft {
    /// Build the payload for the selected kind.
    ///
    /// Documents are described from the file's metadata; the file itself is
    /// not uploaded.
    pub fn to_payload(&self) -> Result<MessagePayload, SyncError> {
        match self.kind {
            AttachmentKind::Image => Ok(MessagePayload::image(self.image_url.trim(), self.caption.trim())),
            AttachmentKind::Document => {
                let path = Path::new(self.document_path.trim());
                let metadata = std::fs::metadata(path)
                    .map_err(|e| SyncError::validation(format!("Cannot read {}: {}", path.display(), e)))?;
                if !metadata.is_file() {
                    return Err(SyncError::validation(format!("{} is not a file", path.display())));
                }
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok(MessagePayload::document(
                    filename,
                    guess_mimetype(path),
                    metadata.len(),
                    self.caption.trim(),
                ))
            }
            AttachmentKind::Contact => Ok(MessagePayload::contact(
                self.contact_name.trim(),
                self.contact_phone.trim(),
            )),
        }
    }

    pub fn clear(&mut self) {
        *self = Self {
            kind: self.kind,
            ..Self::default()
        };
    }
}

/// UI state for the messaging view
#[derive(Debug, Default)]
pub struct MessagingState {
    /// Text in the input bar
    pub message_input: String,
    pub show_attachment_panel: bool,
    pub show_emoji_row: bool,
    pub attachment: AttachmentDraft,
    /// Problem with the attachment panel's fields
    pub attachment_error: Option<String>,
    /// Text of sends still awaiting their outcome, by send id
    pending_texts: HashMap<u64, String>,
}

impl MessagingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the typed text. The input is cleared right away and restored if
    /// the send fails.
    pub fn send_text(&mut self, controller: &mut SyncController) {
        let text = self.message_input.trim().to_string();
        match controller.send(MessagePayload::text(text.clone())) {
            Ok(Some(send_id)) => {
                self.pending_texts.insert(send_id, text);
                self.message_input.clear();
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("[SYNC] Not sending text: {}", e),
        }
    }

    /// Send the attachment panel's payload and close the panel on dispatch
    pub fn send_attachment(&mut self, controller: &mut SyncController) {
        let result = self
            .attachment
            .to_payload()
            .and_then(|payload| controller.send(payload));

        match result {
            Ok(Some(_)) => {
                self.attachment.clear();
                self.attachment_error = None;
                self.show_attachment_panel = false;
            }
            Ok(None) => {}
            Err(e) => self.attachment_error = Some(e.to_string()),
        }
    }

    /// Consume send outcomes; failed text goes back into an empty input bar
    pub fn apply_send_outcomes(&mut self, controller: &mut SyncController) {
        while let Some(outcome) = controller.take_send_outcome() {
            let text = self.pending_texts.remove(&outcome.send_id);
            if outcome.result.is_err() && self.message_input.is_empty() {
                if let Some(text) = text {
                    self.message_input = text;
                }
            }
        }
    }

    pub fn insert_emoji(&mut self, emoji: &str) {
        self.message_input.push_str(emoji);
    }

    pub fn toggle_attachment_panel(&mut self) {
        self.show_attachment_panel = !self.show_attachment_panel;
        self.attachment_error = None;
    }
}
