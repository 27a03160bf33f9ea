//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the browser client and the API
//! server, and how core errors are reported back.

use activity_core::{
    ActivityRecord, CategorySummary, CoreError, Dashboard, RecordId, Status, Suggestion,
    GACHA_THRESHOLD,
};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Payloads Sent FROM the Client TO the Server
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct AddActivityRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddSuggestionRequest {
    pub name: String,
    pub description: String,
    pub duration: String,
}

//=========================================================================================
// Payloads Sent FROM the Server TO the Client
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
}

#[derive(Serialize, ToSchema)]
pub struct ActivityView {
    pub id: usize,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    /// Either `pending` or `done`.
    pub status: String,
}

impl ActivityView {
    pub fn from_record(id: RecordId, record: &ActivityRecord) -> Self {
        Self {
            id,
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            description: record.description.clone(),
            status: status_name(record.status).to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AddActivityResponse {
    pub category: String,
    pub id: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ToggleResponse {
    pub category: String,
    pub id: usize,
    pub status: String,
}

impl ToggleResponse {
    pub fn new(category: impl ToString, id: RecordId, status: Status) -> Self {
        Self {
            category: category.to_string(),
            id,
            status: status_name(status).to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CategorySummaryView {
    pub category: String,
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

impl From<CategorySummary> for CategorySummaryView {
    fn from(summary: CategorySummary) -> Self {
        Self {
            category: summary.category.to_string(),
            total: summary.total,
            done: summary.done,
            pending: summary.pending,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub completion_rate: f64,
    pub pending_count: usize,
    pub gacha_unlocked: bool,
    pub gacha_threshold: f64,
    pub categories: Vec<CategorySummaryView>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            completion_rate: dashboard.completion_rate,
            pending_count: dashboard.pending_count,
            gacha_unlocked: dashboard.gacha_unlocked,
            gacha_threshold: GACHA_THRESHOLD,
            categories: dashboard.categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, PartialEq)]
pub struct SuggestionView {
    pub name: String,
    pub description: String,
    pub duration: String,
}

impl From<&Suggestion> for SuggestionView {
    fn from(s: &Suggestion) -> Self {
        Self {
            name: s.name.clone(),
            description: s.description.clone(),
            duration: s.duration.clone(),
        }
    }
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Pending => "pending",
        Status::Done => "done",
    }
}

//=========================================================================================
// Error Reporting
//=========================================================================================

/// Body of every non-2xx response produced from a core error.
#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorBody {
    /// Machine-readable kind, e.g. `validation` or `gacha_locked`.
    pub kind: String,
    pub message: String,
}

/// The rejection type returned by every handler.
pub type Rejection = (StatusCode, Json<ErrorBody>);

pub fn rejection(status: StatusCode, kind: &str, message: impl Into<String>) -> Rejection {
    (
        status,
        Json(ErrorBody {
            kind: kind.to_string(),
            message: message.into(),
        }),
    )
}

/// Reports an unreadable JSON body (bad syntax, wrong types, unparsable dates
/// or times, missing content type) under the status axum picked for it.
pub fn json_rejection(err: JsonRejection) -> Rejection {
    rejection(err.status(), "malformed_request", err.body_text())
}

/// Reports a path segment that does not fit its type, e.g. a non-numeric id.
pub fn path_rejection(err: PathRejection) -> Rejection {
    rejection(err.status(), "malformed_request", err.body_text())
}

/// Maps a core error onto the HTTP status and body the client renders.
pub fn core_rejection(err: CoreError) -> Rejection {
    if err.is_defect() {
        warn!("Client contract violation: {}", err);
    }
    let (status, kind) = match &err {
        CoreError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
        CoreError::InvalidCategory(_) => (StatusCode::NOT_FOUND, "invalid_category"),
        CoreError::OutOfRange { .. } => (StatusCode::NOT_FOUND, "out_of_range"),
        CoreError::GachaLocked { .. } => (StatusCode::FORBIDDEN, "gacha_locked"),
        CoreError::PoolEmpty => (StatusCode::CONFLICT, "pool_empty"),
    };
    rejection(status, kind, err.to_string())
}
