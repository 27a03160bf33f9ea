//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the per-request session context.

use activity_core::ports::{SessionHandle, SessionStore};
use std::sync::Arc;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
}

//=========================================================================================
// CurrentSession (Specific to One Request)
//=========================================================================================

/// The session resolved from the request's cookie by `require_session`.
#[derive(Clone)]
pub struct CurrentSession {
    pub id: Uuid,
    pub service: SessionHandle,
}
