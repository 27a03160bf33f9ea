pub mod activities;
pub mod gacha;
pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;

pub use middleware::require_session;
pub use rest::{create_session_handler, dashboard_handler, end_session_handler};

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::web::state::AppState;

/// Builds the API routes. CORS and the Swagger UI are layered on by the binary.
pub fn router(app_state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new().route("/sessions", post(create_session_handler));

    // Session routes (session cookie required)
    let session_routes = Router::new()
        .route("/sessions/current", delete(end_session_handler))
        .route("/dashboard", get(dashboard_handler))
        .route(
            "/activities/{category}",
            get(activities::list_activities_handler).post(activities::add_activity_handler),
        )
        .route(
            "/activities/{category}/{id}/toggle",
            post(activities::toggle_activity_handler),
        )
        .route(
            "/suggestions",
            get(gacha::list_suggestions_handler).post(gacha::add_suggestion_handler),
        )
        .route("/gacha/draw", post(gacha::draw_handler))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .with_state(app_state)
}
