//! services/api/src/adapters/memory.rs
//!
//! The session store adapter: the concrete implementation of the
//! `SessionStore` port from the `core` crate. Every session lives in process
//! memory and is discarded when it ends, when it sits idle past the configured
//! timeout, or when the process exits.

use activity_core::ports::{PortError, PortResult, SessionHandle, SessionStore};
use activity_core::ActivityService;
use async_trait::async_trait;
use moka::future::Cache;
use moka::notification::RemovalCause;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// A session store that implements the `SessionStore` port in memory.
///
/// Every lookup refreshes a session's idle timer; a session nobody touches for
/// `idle_timeout` expires and its ledger and pool are dropped.
pub struct InMemorySessionStore {
    sessions: Cache<Uuid, SessionHandle>,
    seed: Option<u64>,
    created: AtomicU64,
}

impl InMemorySessionStore {
    /// Creates an empty store. With a seed, the n-th session draws from a
    /// generator seeded with `seed + n`.
    pub fn new(seed: Option<u64>, idle_timeout: Duration) -> Self {
        let sessions = Cache::<Uuid, SessionHandle>::builder()
            .time_to_idle(idle_timeout)
            .eviction_listener(|session_id: Arc<Uuid>, _, cause| {
                if cause == RemovalCause::Expired {
                    info!(session_id = %session_id, "Session expired");
                }
            })
            .build();

        Self {
            sessions,
            seed,
            created: AtomicU64::new(0),
        }
    }

    fn new_service(&self) -> ActivityService {
        let n = self.created.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => {
                ActivityService::with_random(StdRng::seed_from_u64(seed.wrapping_add(n)))
            }
            None => ActivityService::new(),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self) -> PortResult<Uuid> {
        let session_id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(self.new_service()));
        self.sessions.insert(session_id, handle).await;
        info!(%session_id, "Session created");
        Ok(session_id)
    }

    async fn get_session(&self, session_id: Uuid) -> PortResult<SessionHandle> {
        self.sessions
            .get(&session_id)
            .await
            .ok_or_else(|| PortError::NotFound(format!("session {session_id}")))
    }

    async fn end_session(&self, session_id: Uuid) -> PortResult<()> {
        match self.sessions.remove(&session_id).await {
            Some(_) => {
                info!(%session_id, "Session ended");
                Ok(())
            }
            None => Err(PortError::NotFound(format!("session {session_id}"))),
        }
    }

    async fn session_count(&self) -> usize {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_core::{Category, CoreError};
    use chrono::{NaiveDate, NaiveTime};

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemorySessionStore::new(None, HOUR);
        let first = store.create_session().await.unwrap();
        let second = store.create_session().await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.session_count().await, 2);

        {
            let handle = store.get_session(first).await.unwrap();
            let mut service = handle.lock().await;
            service
                .add_activity(
                    Category::Home,
                    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
                    "Cook dinner",
                )
                .unwrap();
        }

        let other = store.get_session(second).await.unwrap();
        assert_eq!(other.lock().await.pending_count(), 0);
        let same = store.get_session(first).await.unwrap();
        assert_eq!(same.lock().await.pending_count(), 1);
    }

    #[tokio::test]
    async fn ended_session_is_gone() {
        let store = InMemorySessionStore::new(None, HOUR);
        let id = store.create_session().await.unwrap();
        store.end_session(id).await.unwrap();

        assert!(matches!(store.get_session(id).await, Err(PortError::NotFound(_))));
        assert!(matches!(store.end_session(id).await, Err(PortError::NotFound(_))));
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn idle_session_expires() {
        let store = InMemorySessionStore::new(None, Duration::from_millis(200));
        let idle = store.create_session().await.unwrap();
        let busy = store.create_session().await.unwrap();

        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(60)).await;
            store.get_session(busy).await.unwrap();
        }

        assert!(matches!(store.get_session(idle).await, Err(PortError::NotFound(_))));
        assert!(store.get_session(busy).await.is_ok());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn abandoned_sessions_do_not_accumulate() {
        let store = InMemorySessionStore::new(None, Duration::from_millis(50));
        for _ in 0..1_000 {
            store.create_session().await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn seeded_stores_repeat_their_draws() {
        async fn draws(store: &InMemorySessionStore) -> Vec<String> {
            let id = store.create_session().await.unwrap();
            let handle = store.get_session(id).await.unwrap();
            let mut service = handle.lock().await;
            service
                .add_activity(
                    Category::Campus,
                    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    "Lecture",
                )
                .unwrap();
            service.toggle_activity(Category::Campus, 0).unwrap();
            for name in ["A", "B", "C", "D"] {
                service.add_suggestion(name, "desc", "5 minutes").unwrap();
            }
            let names: Result<Vec<String>, CoreError> = (0..16)
                .map(|_| service.draw_suggestion().map(|s| s.name))
                .collect();
            names.unwrap()
        }

        let left = InMemorySessionStore::new(Some(3), HOUR);
        let right = InMemorySessionStore::new(Some(3), HOUR);
        assert_eq!(draws(&left).await, draws(&right).await);
    }
}
