//! crates/activity_core/src/service.rs
//!
//! The composition root of a session: one ledger, one suggestion pool and the
//! random source used for draws.

use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::domain::{
    ActivityRecord, Category, CategorySummary, Dashboard, RecordId, Status, Suggestion,
};
use crate::error::{CoreError, CoreResult};
use crate::ledger::ActivityLedger;
use crate::pool::SuggestionPool;
use crate::ports::RandomSource;

/// Minimum completion rate, in percent, at which the gacha draw unlocks.
pub const GACHA_THRESHOLD: f64 = 80.0;

pub struct ActivityService {
    ledger: ActivityLedger,
    pool: SuggestionPool,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for ActivityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityService")
            .field("ledger", &self.ledger)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl Default for ActivityService {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityService {
    /// Creates an empty service whose draws use an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_random(StdRng::from_entropy())
    }

    /// Creates an empty service drawing from the given source.
    pub fn with_random(rng: impl RandomSource + 'static) -> Self {
        Self {
            ledger: ActivityLedger::new(),
            pool: SuggestionPool::new(),
            rng: Box::new(rng),
        }
    }

    // --- Activities ---

    pub fn add_activity(
        &mut self,
        category: Category,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        description: &str,
    ) -> CoreResult<RecordId> {
        self.ledger.add(category, date, start_time, end_time, description)
    }

    pub fn toggle_activity(&mut self, category: Category, id: RecordId) -> CoreResult<Status> {
        self.ledger.toggle_status(category, id)
    }

    pub fn snapshot(&self, category: Category) -> &[ActivityRecord] {
        self.ledger.snapshot(category)
    }

    pub fn completion_rate(&self) -> f64 {
        self.ledger.completion_rate()
    }

    pub fn pending_count(&self) -> usize {
        self.ledger.pending_count()
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.ledger.summaries()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            completion_rate: self.completion_rate(),
            pending_count: self.pending_count(),
            gacha_unlocked: self.is_gacha_unlocked(),
            categories: self.summaries(),
        }
    }

    // --- Gacha ---

    pub fn add_suggestion(
        &mut self,
        name: &str,
        description: &str,
        duration: &str,
    ) -> CoreResult<()> {
        self.pool.add(name, description, duration)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.pool.entries()
    }

    pub fn is_gacha_unlocked(&self) -> bool {
        self.completion_rate() >= GACHA_THRESHOLD
    }

    /// Draws a suggestion once enough of the ledger is done.
    ///
    /// The lock is checked before the pool, so a locked session reports
    /// `GachaLocked` even when its pool is empty.
    pub fn draw_suggestion(&mut self) -> CoreResult<Suggestion> {
        let rate = self.completion_rate();
        if rate < GACHA_THRESHOLD {
            debug!(rate, "Gacha draw rejected");
            return Err(CoreError::GachaLocked {
                rate,
                threshold: GACHA_THRESHOLD,
            });
        }

        let suggestion = self
            .pool
            .draw_random(self.rng.as_mut())
            .cloned()
            .ok_or(CoreError::PoolEmpty)?;
        info!(name = %suggestion.name, "Gacha draw");
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ActivityService {
        ActivityService::with_random(StdRng::seed_from_u64(7))
    }

    fn add_campus(service: &mut ActivityService, count: usize) {
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        for i in 0..count {
            let start = NaiveTime::from_hms_opt(8 + i as u32, 0, 0).unwrap();
            let end = NaiveTime::from_hms_opt(9 + i as u32, 0, 0).unwrap();
            service
                .add_activity(Category::Campus, date, start, end, &format!("Class {i}"))
                .unwrap();
        }
    }

    #[test]
    fn three_of_four_done_keeps_gacha_locked() {
        let mut service = service();
        add_campus(&mut service, 4);
        for id in 0..3 {
            service.toggle_activity(Category::Campus, id).unwrap();
        }
        service.add_suggestion("Read", "10 pages", "20 minutes").unwrap();

        assert_eq!(service.completion_rate(), 75.0);
        assert_eq!(service.pending_count(), 1);
        assert!(!service.is_gacha_unlocked());
        assert!(matches!(
            service.draw_suggestion(),
            Err(CoreError::GachaLocked { rate, .. }) if rate == 75.0
        ));
    }

    #[test]
    fn all_done_draws_the_only_suggestion() {
        let mut service = service();
        add_campus(&mut service, 4);
        for id in 0..4 {
            service.toggle_activity(Category::Campus, id).unwrap();
        }
        service.add_suggestion("Read", "10 pages", "20 minutes").unwrap();

        assert_eq!(service.completion_rate(), 100.0);
        let drawn = service.draw_suggestion().unwrap();
        assert_eq!(
            drawn,
            Suggestion {
                name: "Read".to_string(),
                description: "10 pages".to_string(),
                duration: "20 minutes".to_string(),
            }
        );
        assert_eq!(service.suggestions().len(), 1);
    }

    #[test]
    fn empty_ledger_is_locked_even_with_empty_pool() {
        let mut service = service();
        assert!(matches!(
            service.draw_suggestion(),
            Err(CoreError::GachaLocked { .. })
        ));
    }

    #[test]
    fn unlocked_with_empty_pool_reports_pool_empty() {
        let mut service = service();
        add_campus(&mut service, 1);
        service.toggle_activity(Category::Campus, 0).unwrap();
        assert_eq!(service.draw_suggestion(), Err(CoreError::PoolEmpty));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut service = service();
        add_campus(&mut service, 5);
        for id in 0..4 {
            service.toggle_activity(Category::Campus, id).unwrap();
        }
        service.add_suggestion("Stretch", "Full body", "5 minutes").unwrap();

        assert_eq!(service.completion_rate(), 80.0);
        assert!(service.is_gacha_unlocked());
        assert!(service.draw_suggestion().is_ok());
    }

    #[test]
    fn errors_propagate_unchanged_from_ledger() {
        let mut service = service();
        assert!(matches!(
            service.toggle_activity(Category::Home, 3),
            Err(CoreError::OutOfRange { id: 3, len: 0, .. })
        ));
        assert!(matches!(
            service.add_suggestion("", "x", "y"),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn dashboard_collects_aggregates() {
        let mut service = service();
        add_campus(&mut service, 2);
        service.toggle_activity(Category::Campus, 0).unwrap();

        let dashboard = service.dashboard();
        assert_eq!(dashboard.completion_rate, 50.0);
        assert_eq!(dashboard.pending_count, 1);
        assert!(!dashboard.gacha_unlocked);
        assert_eq!(dashboard.categories.len(), 2);
        assert_eq!(dashboard.categories[0].done, 1);
        assert_eq!(dashboard.categories[1].total, 0);
    }
}
