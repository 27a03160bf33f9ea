//! crates/activity_core/src/ports.rs
//!
//! Defines the contracts (traits) the core depends on or exposes to adapters.
//! The core stays free of any specific random generator or session storage;
//! the `api` service plugs concrete implementations in at startup.

use async_trait::async_trait;
use rand::RngCore;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::service::ActivityService;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Random Source
//=========================================================================================

/// Picks indices for the gacha draw.
pub trait RandomSource: Send {
    /// Returns an index uniformly distributed over `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore + Send> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}

//=========================================================================================
// Session Store
//=========================================================================================

/// A session's service, locked for one operation at a time.
pub type SessionHandle = Arc<Mutex<ActivityService>>;

/// Owns every live session. Sessions are memory-resident and vanish with the
/// store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a fresh session with an empty ledger and pool.
    async fn create_session(&self) -> PortResult<Uuid>;

    async fn get_session(&self, session_id: Uuid) -> PortResult<SessionHandle>;

    /// Drops a session and all of its state.
    async fn end_session(&self, session_id: Uuid) -> PortResult<()>;

    async fn session_count(&self) -> usize;
}
