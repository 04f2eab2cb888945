use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mindscope_core::models::report::ReportDocument;
use mindscope_core::store_keys;
use mindscope_storage::state::save_state;
use mindscope_storage::store::DocumentStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail delivery failed: {0}")]
    Delivery(String),

    #[error("mail delivery timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    /// Base64 (standard alphabet) file contents.
    pub data_base64: String,
}

/// A message ready to hand to a relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: Option<Attachment>,
    pub created_at: jiff::Timestamp,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), MailError>;
}

/// Writes outgoing messages into the document store's outbox, where an
/// external relay picks them up.
pub struct SpoolMailer {
    store: DocumentStore,
}

impl SpoolMailer {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Mailer for SpoolMailer {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), MailError> {
        save_state(&self.store, &store_keys::outbox_message(message.id), message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        tracing::info!(message_id = %message.id, to = %message.to, "message spooled");
        Ok(())
    }
}

/// Build the report email: text summary as the body, DOCX attached.
pub fn compose_report_message(
    from: &str,
    to: &str,
    doc: &ReportDocument,
    summary: &str,
    docx: &[u8],
) -> OutgoingMessage {
    OutgoingMessage {
        id: Uuid::new_v4(),
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("Your assessment report ({})", doc.report_id),
        body: summary.to_string(),
        attachment: Some(Attachment {
            filename: format!("{}.docx", doc.report_id),
            content_type: DOCX_CONTENT_TYPE.to_string(),
            data_base64: STANDARD.encode(docx),
        }),
        created_at: jiff::Timestamp::now(),
    }
}

/// One delivery attempt, bounded by `timeout`.
pub async fn deliver(
    mailer: &dyn Mailer,
    message: &OutgoingMessage,
    timeout: Duration,
) -> Result<(), MailError> {
    match tokio::time::timeout(timeout, mailer.send(message)).await {
        Ok(result) => result,
        Err(_) => Err(MailError::Timeout(timeout)),
    }
}
