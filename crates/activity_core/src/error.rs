//! crates/activity_core/src/error.rs
//!
//! The error type returned by every ledger, pool and service operation.

use crate::domain::{Category, RecordId};

/// Failures raised by the core. Each one is a deterministic function of
/// the caller's input and the current session state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// Caller-correctable input problem (blank text, end time not after start time).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("No record {id} in category {category} (it has {len})")]
    OutOfRange {
        category: Category,
        id: RecordId,
        len: usize,
    },

    /// The completion rate is below the gacha threshold.
    #[error("Gacha is locked: completion rate {rate:.1}% is below {threshold:.1}%")]
    GachaLocked { rate: f64, threshold: f64 },

    #[error("The suggestion pool is empty")]
    PoolEmpty,
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Contract violations that an honest caller never triggers.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::InvalidCategory(_) | Self::OutOfRange { .. })
    }
}

/// A convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;
