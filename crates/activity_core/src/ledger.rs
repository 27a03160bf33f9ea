//! crates/activity_core/src/ledger.rs
//!
//! The activity ledger: two insertion-ordered record sequences, one per
//! category, plus the aggregate arithmetic over them.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::domain::{ActivityRecord, Category, CategorySummary, RecordId, Status};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Default, Clone)]
pub struct ActivityLedger {
    campus: Vec<ActivityRecord>,
    home: Vec<ActivityRecord>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self, category: Category) -> &Vec<ActivityRecord> {
        match category {
            Category::Campus => &self.campus,
            Category::Home => &self.home,
        }
    }

    fn records_mut(&mut self, category: Category) -> &mut Vec<ActivityRecord> {
        match category {
            Category::Campus => &mut self.campus,
            Category::Home => &mut self.home,
        }
    }

    /// Appends a new pending record and returns its position in the category.
    pub fn add(
        &mut self,
        category: Category,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        description: &str,
    ) -> CoreResult<RecordId> {
        let record = ActivityRecord::new(date, start_time, end_time, description)?;
        let records = self.records_mut(category);
        records.push(record);
        let id = records.len() - 1;
        debug!(%category, id, "Activity added");
        Ok(id)
    }

    /// Flips the record between pending and done, returning the new status.
    pub fn toggle_status(&mut self, category: Category, id: RecordId) -> CoreResult<Status> {
        let records = self.records_mut(category);
        let len = records.len();
        let record = records
            .get_mut(id)
            .ok_or(CoreError::OutOfRange { category, id, len })?;
        record.toggle();
        debug!(%category, id, status = ?record.status, "Activity toggled");
        Ok(record.status)
    }

    /// Read-only view of a category, in insertion order.
    pub fn snapshot(&self, category: Category) -> &[ActivityRecord] {
        self.records(category)
    }

    fn all(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.campus.iter().chain(self.home.iter())
    }

    pub fn len(&self) -> usize {
        self.campus.len() + self.home.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Percentage of records across both categories that are done.
    /// An empty ledger reports `0.0`.
    pub fn completion_rate(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            return 0.0;
        }
        let done = self.all().filter(|r| r.is_done()).count();
        100.0 * done as f64 / total as f64
    }

    pub fn pending_count(&self) -> usize {
        self.all().filter(|r| !r.is_done()).count()
    }

    pub fn summary(&self, category: Category) -> CategorySummary {
        let records = self.records(category);
        let done = records.iter().filter(|r| r.is_done()).count();
        CategorySummary {
            category,
            total: records.len(),
            done,
            pending: records.len() - done,
        }
    }

    /// Summaries for every category, campus first.
    pub fn summaries(&self) -> Vec<CategorySummary> {
        Category::ALL.iter().map(|c| self.summary(*c)).collect()
    }
}
