//! crates/activity_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or storage format.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Positional identifier of a record inside its category sequence.
pub type RecordId = usize;

/// One of the two fixed groupings of activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Campus,
    Home,
}

impl Category {
    /// Every category, in the order the ledger reports them.
    pub const ALL: [Category; 2] = [Category::Campus, Category::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Campus => "campus",
            Category::Home => "home",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "campus" => Ok(Category::Campus),
            "home" => Ok(Category::Home),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}

/// Completion state of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Done,
}

impl Status {
    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Done,
            Status::Done => Status::Pending,
        }
    }
}

/// A single scheduled activity entry.
///
/// Only the ledger creates records, and only through [`ActivityRecord::new`],
/// so a stored record always has `end_time > start_time` and a non-blank
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    pub status: Status,
}

impl ActivityRecord {
    pub(crate) fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        description: &str,
    ) -> CoreResult<Self> {
        if end_time <= start_time {
            return Err(CoreError::validation("end time must be after start time"));
        }
        require_text("description", description)?;

        Ok(Self {
            date,
            start_time,
            end_time,
            description: description.to_string(),
            status: Status::Pending,
        })
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    pub(crate) fn toggle(&mut self) {
        self.status = self.status.toggled();
    }
}

/// A recommended activity offered through the gacha draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    pub duration: String,
}

impl Suggestion {
    pub(crate) fn new(name: &str, description: &str, duration: &str) -> CoreResult<Self> {
        require_text("name", name)?;
        require_text("description", description)?;
        require_text("duration", duration)?;

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
        })
    }
}

/// Per-category counts, used for the completed-per-category comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

/// Everything the dashboard renders in one read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub completion_rate: f64,
    pub pending_count: usize,
    pub gacha_unlocked: bool,
    pub categories: Vec<CategorySummary>,
}

fn require_text(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
