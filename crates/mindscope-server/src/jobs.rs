use std::sync::Arc;
use std::time::Duration;

use mindscope_core::models::submission::Submission;
use mindscope_export::assemble::{ReportInput, assemble_report};
use mindscope_export::chart::attach_charts;
use mindscope_export::docx::generate_docx;
use mindscope_export::error::ExportError;
use mindscope_export::render::render_summary;
use mindscope_instruments::session::CompletedSession;
use mindscope_storage::error::StorageError;
use mindscope_storage::submissions::{load_report_docx, save_report, save_submission};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::mail::{compose_report_message, deliver};
use crate::state::{AppState, DeliveryStatus, GeneratedReport, ReportState};

/// How often idle sessions and expired admin tokens are swept.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Start the one-shot report job for a completed session.
///
/// `cancel` must be the token handed out by
/// [`SessionEntry::start_job`](crate::state::SessionEntry::start_job). Once
/// cancelled the job stops at its next step: nothing further is stored on
/// the session, persisted or mailed.
pub fn spawn_report_job(
    state: AppState,
    session_id: Uuid,
    completed: CompletedSession,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(%session_id, "report job started");

        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(%session_id, "report job cancelled");
                return;
            }
            outcome = build_report(&state, completed.clone()) => outcome,
        };

        let report = {
            let mut sessions = state.sessions.lock().await;
            // A restart may have landed between the build finishing and the lock.
            if cancel.is_cancelled() {
                tracing::info!(%session_id, "report job cancelled");
                return;
            }
            let Some(entry) = sessions.get_mut(&session_id) else {
                return;
            };
            match outcome {
                Ok(report) => {
                    let report = Arc::new(report);
                    entry.report = ReportState::Ready(report.clone());
                    report
                }
                Err(e) => {
                    tracing::error!(%session_id, error = %e, "report generation failed");
                    entry.report = ReportState::Failed(e.to_string());
                    return;
                }
            }
        };
        tracing::info!(%session_id, report_id = %report.document.report_id, "report ready");

        if cancel.is_cancelled() {
            tracing::info!(%session_id, "report job cancelled before persisting");
            return;
        }
        if persist(&state, &completed, &report).await {
            release_docx(&state, session_id, &report).await;
        }

        let Some(to) = completed.respondent.email.as_deref() else {
            return;
        };
        let Some(docx) = report.docx.as_deref() else {
            return;
        };
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(%session_id, "report job cancelled before delivery");
            }
            _ = send_report(&state, session_id, &report, docx, to) => {}
        }
    })
}

async fn build_report(
    state: &AppState,
    completed: CompletedSession,
) -> Result<GeneratedReport, ExportError> {
    let input = ReportInput::from_completed(completed, state.config.contact.clone());
    let mut document = assemble_report(input);
    attach_charts(&mut document, state.charts.as_ref(), state.config.chart_timeout).await;
    let docx = generate_docx(&document, &state.styles)?;
    let summary = render_summary(&document)?;
    Ok(GeneratedReport {
        document,
        summary,
        docx: Some(docx),
    })
}

/// Save the submission and report. Failures are logged only; the report
/// stays downloadable from memory. Returns whether the DOCX reached the
/// store.
async fn persist(state: &AppState, completed: &CompletedSession, report: &GeneratedReport) -> bool {
    let submission = Submission {
        id: completed.session_id,
        report_id: report.document.report_id.clone(),
        respondent: completed.respondent.clone(),
        scores: completed.scores,
        submitted_at: jiff::Timestamp::now(),
    };
    if let Err(e) = save_submission(&state.store, &submission).await {
        tracing::warn!(session_id = %completed.session_id, error = %e, "failed to persist submission");
    }
    match save_report(&state.store, &report.document, report.docx.as_deref()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(session_id = %completed.session_id, error = %e, "failed to persist report");
            false
        }
    }
}

/// Swap the session's report for one without DOCX bytes; downloads read
/// them back from the store.
async fn release_docx(state: &AppState, session_id: Uuid, report: &Arc<GeneratedReport>) {
    let mut sessions = state.sessions.lock().await;
    let Some(entry) = sessions.get_mut(&session_id) else {
        return;
    };
    let current = match &entry.report {
        ReportState::Ready(current) => current,
        _ => return,
    };
    if Arc::ptr_eq(current, report) {
        entry.report = ReportState::Ready(Arc::new(GeneratedReport {
            document: report.document.clone(),
            summary: report.summary.clone(),
            docx: None,
        }));
        tracing::debug!(%session_id, "in-memory docx released");
    }
}

/// The DOCX for a ready report, from memory or from the store.
pub async fn report_docx(state: &AppState, report: &GeneratedReport) -> Result<Vec<u8>, StorageError> {
    match &report.docx {
        Some(bytes) => Ok(bytes.clone()),
        None => load_report_docx(&state.store, &report.document.report_id).await,
    }
}

/// Attempt delivery once and record the outcome on the session.
///
/// The outcome is only recorded while the session still holds this same
/// report; a restart in the meantime leaves the session untouched.
pub async fn send_report(
    state: &AppState,
    session_id: Uuid,
    report: &GeneratedReport,
    docx: &[u8],
    to: &str,
) -> DeliveryStatus {
    let message = compose_report_message(
        &state.config.mail_from,
        to,
        &report.document,
        &report.summary,
        docx,
    );
    let status = match deliver(state.mailer.as_ref(), &message, state.config.mail_timeout).await {
        Ok(()) => {
            tracing::info!(%session_id, message_id = %message.id, "report sent");
            DeliveryStatus::Sent {
                to: to.to_string(),
                message_id: message.id,
            }
        }
        Err(e) => {
            tracing::warn!(%session_id, error = %e, "report delivery failed");
            DeliveryStatus::Failed {
                to: to.to_string(),
                reason: e.to_string(),
            }
        }
    };

    let mut sessions = state.sessions.lock().await;
    match sessions.get_mut(&session_id) {
        Some(entry) if entry.ready_report(report.document.report_id.as_str()).is_some() => {
            entry.delivery = status.clone();
        }
        _ => tracing::info!(%session_id, "delivery outcome dropped; session moved on"),
    }
    status
}

/// Periodically evict idle sessions and expired admin tokens.
pub fn spawn_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let sessions = state.evict_idle_sessions(state.config.session_ttl).await;
            let tokens = state.tokens.sweep().await;
            if sessions > 0 || tokens > 0 {
                tracing::info!(sessions, tokens, "sweep finished");
            }
        }
    })
}
