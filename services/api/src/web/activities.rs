//! services/api/src/web/activities.rs
//!
//! Handlers for the per-category activity lists.

use crate::web::{
    protocol::{
        core_rejection, json_rejection, path_rejection, ActivityView, AddActivityRequest,
        AddActivityResponse, ErrorBody, Rejection, ToggleResponse,
    },
    state::CurrentSession,
};
use activity_core::{Category, RecordId};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

fn parse_category(raw: &str) -> Result<Category, Rejection> {
    raw.parse::<Category>().map_err(core_rejection)
}

/// GET /activities/{category} - List a category's activities in insertion order
#[utoipa::path(
    get,
    path = "/activities/{category}",
    params(("category" = String, Path, description = "`campus` or `home`")),
    responses(
        (status = 200, description = "Activities of the category", body = [ActivityView]),
        (status = 404, description = "Unknown category", body = ErrorBody)
    )
)]
pub async fn list_activities_handler(
    Extension(session): Extension<CurrentSession>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ActivityView>>, Rejection> {
    let Path(category) = path.map_err(path_rejection)?;
    let category = parse_category(&category)?;
    let service = session.service.lock().await;
    let views = service
        .snapshot(category)
        .iter()
        .enumerate()
        .map(|(id, record)| ActivityView::from_record(id, record))
        .collect();
    Ok(Json(views))
}

/// POST /activities/{category} - Add a pending activity
#[utoipa::path(
    post,
    path = "/activities/{category}",
    params(("category" = String, Path, description = "`campus` or `home`")),
    request_body = AddActivityRequest,
    responses(
        (status = 201, description = "Activity added", body = AddActivityResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 404, description = "Unknown category", body = ErrorBody),
        (
            status = 422,
            description = "Blank description, end time not after start, or unparsable date/time",
            body = ErrorBody
        )
    )
)]
pub async fn add_activity_handler(
    Extension(session): Extension<CurrentSession>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<AddActivityRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Rejection> {
    let Path(category) = path.map_err(path_rejection)?;
    let category = parse_category(&category)?;
    let Json(req) = body.map_err(json_rejection)?;
    let mut service = session.service.lock().await;
    let id = service
        .add_activity(category, req.date, req.start_time, req.end_time, &req.description)
        .map_err(core_rejection)?;

    Ok((
        StatusCode::CREATED,
        Json(AddActivityResponse {
            category: category.to_string(),
            id,
        }),
    ))
}

/// POST /activities/{category}/{id}/toggle - Flip an activity between pending and done
#[utoipa::path(
    post,
    path = "/activities/{category}/{id}/toggle",
    params(
        ("category" = String, Path, description = "`campus` or `home`"),
        ("id" = usize, Path, description = "Position of the activity within its category")
    ),
    responses(
        (status = 200, description = "New status", body = ToggleResponse),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "Unknown category or activity", body = ErrorBody)
    )
)]
pub async fn toggle_activity_handler(
    Extension(session): Extension<CurrentSession>,
    path: Result<Path<(String, RecordId)>, PathRejection>,
) -> Result<Json<ToggleResponse>, Rejection> {
    let Path((category, id)) = path.map_err(path_rejection)?;
    let category = parse_category(&category)?;
    let mut service = session.service.lock().await;
    let status = service
        .toggle_activity(category, id)
        .map_err(core_rejection)?;
    Ok(Json(ToggleResponse::new(category, id, status)))
}
