use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use mindscope_core::models::report::{ReportDocument, ReportId};
use mindscope_core::models::submission::Submission;
use mindscope_storage::submissions::{delete_submission, list_submissions, load_report, load_report_docx};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::pin_matches;
use crate::error::ApiError;
use crate::mail::DOCX_CONTENT_TYPE;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub pin: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    token: Uuid,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(expected) = state.config.admin_pin.as_deref() else {
        return Err(ApiError::Unauthorized("admin access is disabled".to_string()));
    };
    if !pin_matches(expected, &req.pin) {
        tracing::warn!("admin login rejected");
        return Err(ApiError::Unauthorized("invalid pin".to_string()));
    }

    let token = state.tokens.issue().await;
    tracing::info!("admin login");
    Ok(Json(LoginResponse { token }))
}

pub async fn submissions(State(state): State<AppState>) -> Result<Json<Vec<Submission>>, ApiError> {
    Ok(Json(list_submissions(&state.store).await?))
}

pub async fn remove_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match delete_submission(&state.store, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::NotFound(format!("submission not found: {id}"))),
    }
}

pub async fn stored_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<ReportDocument>, ApiError> {
    let report_id: ReportId = report_id.parse()?;
    Ok(Json(load_report(&state.store, &report_id).await?))
}

pub async fn stored_report_docx(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report_id: ReportId = report_id.parse()?;
    let docx = load_report_docx(&state.store, &report_id).await?;
    let disposition = format!("attachment; filename=\"report-{report_id}.docx\"");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        docx,
    ))
}
