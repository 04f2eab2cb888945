use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use mindscope_core::models::report::ReportDocument;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::jobs;
use crate::mail::DOCX_CONTENT_TYPE;
use crate::routes::sessions::session_not_found;
use crate::state::{AppState, DeliveryStatus, GeneratedReport, ReportState};

#[derive(Serialize)]
pub struct ReportStatusResponse {
    status: &'static str,
    report: Option<ReportDocument>,
    delivery: DeliveryStatus,
    error: Option<String>,
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportStatusResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();

    let (report, error) = match &entry.report {
        ReportState::Ready(generated) => (Some(generated.document.clone()), None),
        ReportState::Failed(reason) => (None, Some(reason.clone())),
        ReportState::NotStarted | ReportState::Pending => (None, None),
    };

    Ok(Json(ReportStatusResponse {
        status: entry.report.status(),
        report,
        delivery: entry.delivery.clone(),
        error,
    }))
}

async fn ready_report(state: &AppState, id: Uuid) -> Result<Arc<GeneratedReport>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    match &entry.report {
        ReportState::Ready(generated) => Ok(generated.clone()),
        other => Err(ApiError::Conflict(format!(
            "report is not ready (status: {})",
            other.status()
        ))),
    }
}

pub async fn download_docx(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let report = ready_report(&state, id).await?;
    let docx = jobs::report_docx(&state, &report).await?;
    let disposition = format!(
        "attachment; filename=\"report-{}.docx\"",
        report.document.report_id
    );
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        docx,
    ))
}

pub async fn download_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let report = ready_report(&state, id).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.summary.clone(),
    ))
}

#[derive(Deserialize, Default)]
pub struct EmailRequest {
    pub to: Option<String>,
}

/// Send (or resend) the finished report. Falls back to the respondent's
/// own address when no recipient is given.
pub async fn email_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EmailRequest>,
) -> Result<(StatusCode, Json<DeliveryStatus>), ApiError> {
    let report = ready_report(&state, id).await?;

    let to = match req.to.filter(|to| !to.trim().is_empty()) {
        Some(to) => to,
        None => report
            .document
            .respondent
            .email
            .clone()
            .ok_or_else(|| ApiError::BadRequest("no recipient address".to_string()))?,
    };
    if !to.contains('@') {
        return Err(ApiError::BadRequest(format!("invalid recipient address: {to}")));
    }

    let docx = jobs::report_docx(&state, &report).await?;
    let status = jobs::send_report(&state, id, &report, &docx, &to).await;
    let code = match status {
        DeliveryStatus::Failed { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    Ok((code, Json(status)))
}
