pub mod domain;
pub mod error;
pub mod ledger;
pub mod pool;
pub mod ports;
pub mod service;

pub use domain::{
    ActivityRecord, Category, CategorySummary, Dashboard, RecordId, Status, Suggestion,
};
pub use error::{CoreError, CoreResult};
pub use ledger::ActivityLedger;
pub use pool::SuggestionPool;
pub use ports::{PortError, PortResult, RandomSource, SessionHandle, SessionStore};
pub use service::{ActivityService, GACHA_THRESHOLD};
