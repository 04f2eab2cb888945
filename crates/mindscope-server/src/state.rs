use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use mindscope_core::models::report::ReportDocument;
use mindscope_export::chart::ChartRenderer;
use mindscope_export::styles::DocumentStyles;
use mindscope_instruments::catalog::Catalog;
use mindscope_instruments::session::Session;
use mindscope_storage::store::DocumentStore;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::auth::TokenStore;
use crate::config::ServerConfig;
use crate::mail::Mailer;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<Catalog>,
    pub store: DocumentStore,
    pub sessions: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
    pub tokens: TokenStore,
    pub mailer: Arc<dyn Mailer>,
    pub charts: Arc<dyn ChartRenderer>,
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        catalog: Arc<Catalog>,
        store: DocumentStore,
        mailer: Arc<dyn Mailer>,
        charts: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            tokens: TokenStore::new(config.token_ttl),
            config: Arc::new(config),
            catalog,
            store,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            mailer,
            charts,
            styles: Arc::new(DocumentStyles::default()),
        }
    }

    /// Forget sessions untouched for at least `ttl`, stopping any job they
    /// still own. Returns how many were dropped.
    pub async fn evict_idle_sessions(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let keep = now.saturating_duration_since(entry.last_seen) < ttl;
            if !keep {
                entry.reset_report();
                tracing::debug!(session_id = %id, "idle session evicted");
            }
            keep
        });
        before - sessions.len()
    }
}

pub struct SessionEntry {
    pub session: Session,
    pub report: ReportState,
    pub delivery: DeliveryStatus,
    /// Cancels the report job, including its persist and mail steps.
    job: Option<CancellationToken>,
    last_seen: Instant,
}

impl SessionEntry {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            report: ReportState::NotStarted,
            delivery: DeliveryStatus::NotRequested,
            job: None,
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Mark the report pending and hand out the token of the job that will
    /// build it.
    pub fn start_job(&mut self) -> CancellationToken {
        if let Some(previous) = self.job.take() {
            previous.cancel();
        }
        let cancel = CancellationToken::new();
        self.job = Some(cancel.clone());
        self.report = ReportState::Pending;
        cancel
    }

    /// Stop the report job wherever it is and forget its output.
    pub fn reset_report(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel();
        }
        self.report = ReportState::NotStarted;
        self.delivery = DeliveryStatus::NotRequested;
    }

    /// The ready report, if it is the one identified by `report_id`.
    pub fn ready_report(&self, report_id: &str) -> Option<&Arc<GeneratedReport>> {
        match &self.report {
            ReportState::Ready(report) if report.document.report_id.as_str() == report_id => {
                Some(report)
            }
            _ => None,
        }
    }
}

/// Rendered outputs of a finished report job.
pub struct GeneratedReport {
    pub document: ReportDocument,
    pub summary: String,
    /// Held in memory until the document store has a copy.
    pub docx: Option<Vec<u8>>,
}

pub enum ReportState {
    NotStarted,
    Pending,
    Ready(Arc<GeneratedReport>),
    Failed(String),
}

impl ReportState {
    pub fn status(&self) -> &'static str {
        match self {
            ReportState::NotStarted => "not_started",
            ReportState::Pending => "pending",
            ReportState::Ready(_) => "ready",
            ReportState::Failed(_) => "failed",
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self, ReportState::NotStarted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    NotRequested,
    Sent { to: String, message_id: Uuid },
    Failed { to: String, reason: String },
}
