//! services/api/src/web/rest.rs
//!
//! Contains the session and dashboard handlers and the master definition for
//! the OpenAPI specification.

use crate::web::{
    activities, gacha,
    middleware::SESSION_COOKIE,
    protocol::{
        rejection, ActivityView, AddActivityRequest, AddActivityResponse, AddSuggestionRequest,
        CategorySummaryView, DashboardResponse, ErrorBody, Rejection, SessionResponse,
        SuggestionView, ToggleResponse,
    },
    state::{AppState, CurrentSession},
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Extension,
};
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        create_session_handler,
        end_session_handler,
        dashboard_handler,
        activities::list_activities_handler,
        activities::add_activity_handler,
        activities::toggle_activity_handler,
        gacha::list_suggestions_handler,
        gacha::add_suggestion_handler,
        gacha::draw_handler,
    ),
    components(
        schemas(
            SessionResponse,
            DashboardResponse,
            CategorySummaryView,
            ActivityView,
            AddActivityRequest,
            AddActivityResponse,
            ToggleResponse,
            AddSuggestionRequest,
            SuggestionView,
            ErrorBody,
        )
    ),
    tags(
        (
            name = "Activity Tracker API",
            description = "Activity ledger, completion statistics and the gated gacha draw."
        )
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Session Handlers
//=========================================================================================

/// POST /sessions - Start a new session with an empty ledger and pool
#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session created, cookie set", body = SessionResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Rejection> {
    let session_id = state.sessions.create_session().await.map_err(|e| {
        error!("Failed to create session: {:?}", e);
        rejection(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "Failed to create session",
        )
    })?;

    let cookie = format!("{SESSION_COOKIE}={session_id}; HttpOnly; SameSite=Lax; Path=/");

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse { session_id }),
    ))
}

/// DELETE /sessions/current - End the current session and discard its state
#[utoipa::path(
    delete,
    path = "/sessions/current",
    responses(
        (status = 204, description = "Session ended, cookie cleared"),
        (status = 401, description = "No active session")
    )
)]
pub async fn end_session_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, Rejection> {
    state.sessions.end_session(session.id).await.map_err(|e| {
        error!("Failed to end session: {:?}", e);
        rejection(StatusCode::INTERNAL_SERVER_ERROR, "internal", "Failed to end session")
    })?;

    let cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

//=========================================================================================
// Dashboard
//=========================================================================================

/// GET /dashboard - Completion rate, pending count and per-category totals
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Aggregate statistics", body = DashboardResponse),
        (status = 401, description = "No active session")
    )
)]
pub async fn dashboard_handler(
    Extension(session): Extension<CurrentSession>,
) -> Json<DashboardResponse> {
    let service = session.service.lock().await;
    Json(service.dashboard().into())
}
