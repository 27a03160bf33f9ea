//! services/api/src/web/gacha.rs
//!
//! Handlers for the suggestion pool and the gated draw.

use crate::web::{
    protocol::{
        core_rejection, json_rejection, AddSuggestionRequest, ErrorBody, Rejection,
        SuggestionView,
    },
    state::CurrentSession,
};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

/// GET /suggestions - List the pool
#[utoipa::path(
    get,
    path = "/suggestions",
    responses(
        (status = 200, description = "Pool entries", body = [SuggestionView])
    )
)]
pub async fn list_suggestions_handler(
    Extension(session): Extension<CurrentSession>,
) -> Json<Vec<SuggestionView>> {
    let service = session.service.lock().await;
    Json(service.suggestions().iter().map(SuggestionView::from).collect())
}

/// POST /suggestions - Add a suggestion to the pool
#[utoipa::path(
    post,
    path = "/suggestions",
    request_body = AddSuggestionRequest,
    responses(
        (status = 201, description = "Suggestion added"),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 422, description = "A field is blank or missing", body = ErrorBody)
    )
)]
pub async fn add_suggestion_handler(
    Extension(session): Extension<CurrentSession>,
    body: Result<Json<AddSuggestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Rejection> {
    let Json(req) = body.map_err(json_rejection)?;
    let mut service = session.service.lock().await;
    service
        .add_suggestion(&req.name, &req.description, &req.duration)
        .map_err(core_rejection)?;
    Ok(StatusCode::CREATED)
}

/// POST /gacha/draw - Draw a random suggestion once the completion rate allows it
#[utoipa::path(
    post,
    path = "/gacha/draw",
    responses(
        (status = 200, description = "The drawn suggestion", body = SuggestionView),
        (status = 403, description = "Completion rate below the threshold", body = ErrorBody),
        (status = 409, description = "The pool is empty", body = ErrorBody)
    )
)]
pub async fn draw_handler(
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<SuggestionView>, Rejection> {
    let mut service = session.service.lock().await;
    let suggestion = service.draw_suggestion().map_err(core_rejection)?;
    Ok(Json(SuggestionView::from(&suggestion)))
}
