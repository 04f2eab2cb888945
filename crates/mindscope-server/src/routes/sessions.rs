use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mindscope_core::models::question::Question;
use mindscope_core::models::respondent::Respondent;
use mindscope_core::models::scores::ScoreRecord;
use mindscope_instruments::session::{Progress, Session};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::jobs;
use crate::state::{AppState, ReportState, SessionEntry};

pub(crate) fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session not found: {id}"))
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub respondent: Respondent,
}

#[derive(Serialize)]
pub struct SessionCreated {
    session_id: Uuid,
    progress: Progress,
    first_position: Option<usize>,
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    if req.respondent.name.trim().is_empty() {
        return Err(ApiError::BadRequest("respondent name is required".to_string()));
    }

    let session = Session::new(req.respondent, state.catalog.clone());
    let body = SessionCreated {
        session_id: session.id,
        progress: session.progress(),
        first_position: session.catalog().questions().next().map(|q| q.ordinal_position),
    };
    tracing::info!(session_id = %session.id, "session created");
    state
        .sessions
        .lock()
        .await
        .insert(session.id, SessionEntry::new(session));

    Ok((StatusCode::CREATED, Json(body)))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: i64,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    replaced: Option<u8>,
    scores: ScoreRecord,
    progress: Progress,
    next_position: Option<usize>,
}

/// Record one answer and return the recomputed live scores.
pub async fn record_answer(
    State(state): State<AppState>,
    Path((id, position)): Path<(Uuid, usize)>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let value = u8::try_from(req.value)
        .map_err(|_| ApiError::BadRequest(format!("invalid answer value {}", req.value)))?;

    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    if entry.report.is_started() {
        return Err(ApiError::Conflict(
            "session already completed; restart to change answers".to_string(),
        ));
    }

    let session = &mut entry.session;
    let replaced = session.record_answer(position, &req.question_id, value)?;
    let scores = *session.recompute();

    Ok(Json(AnswerResponse {
        replaced: replaced.map(|a| a.value),
        scores,
        progress: session.progress(),
        next_position: session.next_position(position),
    }))
}

#[derive(Serialize)]
pub struct ScoresResponse {
    scores: ScoreRecord,
    progress: Progress,
}

pub async fn get_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    Ok(Json(ScoresResponse {
        scores: *entry.session.scores(),
        progress: entry.session.progress(),
    }))
}

#[derive(Serialize)]
pub struct PreviousResponse {
    position: Option<usize>,
    question: Option<Question>,
    value: Option<u8>,
}

/// Where "back" leads from `position`, with the answer already given there.
pub async fn previous_question(
    State(state): State<AppState>,
    Path((id, position)): Path<(Uuid, usize)>,
) -> Result<Json<PreviousResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    let session = &entry.session;

    let previous = session.previous_position(position);
    Ok(Json(PreviousResponse {
        position: previous,
        question: previous.and_then(|p| session.catalog().question(p).cloned()),
        value: previous.and_then(|p| session.ledger().answer_at(p).map(|a| a.value)),
    }))
}

#[derive(Serialize)]
pub struct ProgressResponse {
    progress: Progress,
}

/// Clear answers, scores and any report in progress.
pub async fn restart_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    entry.reset_report();
    entry.session.restart();
    Ok(Json(ProgressResponse {
        progress: entry.session.progress(),
    }))
}

#[derive(Serialize)]
pub struct CompleteResponse {
    status: &'static str,
}

/// Finalise the session and start report generation in the background.
///
/// Repeating the call while a report is pending or ready is a no-op.
pub async fn complete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<CompleteResponse>), ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();

    if matches!(entry.report, ReportState::Pending | ReportState::Ready(_)) {
        return Ok((
            StatusCode::ACCEPTED,
            Json(CompleteResponse {
                status: entry.report.status(),
            }),
        ));
    }

    let completed = entry.session.complete()?;
    let cancel = entry.start_job();
    drop(sessions);

    jobs::spawn_report_job(state.clone(), id, completed, cancel);

    Ok((StatusCode::ACCEPTED, Json(CompleteResponse { status: "pending" })))
}
