//! mindscope-server
//!
//! HTTP surface for the assessment pipeline: sessions, live scoring,
//! background report generation, downloads, mail delivery and the
//! PIN-guarded submissions view.

pub mod auth;
pub mod config;
pub mod error;
pub mod jobs;
pub mod mail;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin = Router::new()
        .route("/admin/submissions", get(routes::admin::submissions))
        .route("/admin/submissions/{id}", delete(routes::admin::remove_submission))
        .route("/admin/reports/{report_id}", get(routes::admin::stored_report))
        .route(
            "/admin/reports/{report_id}/report.docx",
            get(routes::admin::stored_report_docx),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/catalog", get(routes::catalog::get_catalog))
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}/answers/{position}",
            put(routes::sessions::record_answer),
        )
        .route("/sessions/{id}/scores", get(routes::sessions::get_scores))
        .route(
            "/sessions/{id}/previous/{position}",
            get(routes::sessions::previous_question),
        )
        .route("/sessions/{id}/restart", post(routes::sessions::restart_session))
        .route("/sessions/{id}/complete", post(routes::sessions::complete_session))
        .route("/sessions/{id}/report", get(routes::reports::get_report))
        .route("/sessions/{id}/report.docx", get(routes::reports::download_docx))
        .route("/sessions/{id}/report.txt", get(routes::reports::download_text))
        .route("/sessions/{id}/email", post(routes::reports::email_report))
        .route("/auth/login", post(routes::admin::login))
        .merge(admin)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
