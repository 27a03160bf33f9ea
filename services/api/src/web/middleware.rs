//! services/api/src/web/middleware.rs
//!
//! Session middleware for routes that operate on a session's ledger and pool.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::web::state::{AppState, CurrentSession};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "session";

/// Reads the session id from the `session=` cookie, if present and well formed.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|c| {
            c.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .and_then(|id| Uuid::parse_str(id).ok())
}

/// Middleware that resolves the session cookie against the session store.
///
/// If valid, inserts a `CurrentSession` into request extensions for handlers to use.
/// If missing or unknown, returns 401 Unauthorized.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let session_id = session_id_from_headers(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let service = state
        .sessions
        .get_session(session_id)
        .await
        .map_err(|e| {
            debug!("Rejected session cookie: {}", e);
            StatusCode::UNAUTHORIZED
        })?;

    req.extensions_mut().insert(CurrentSession {
        id: session_id,
        service,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_session_among_other_cookies() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; session={id}; lang=en")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_or_lookalike_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("sessions=abc; session=not-a-uuid"),
        );
        assert_eq!(session_id_from_headers(&headers), None);
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }
}
