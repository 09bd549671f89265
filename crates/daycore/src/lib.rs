//! Daily-tracking core
//!
//! Day records keyed by calendar date, the four domain scores computed from
//! them, and a snapshot-backed record store. No I/O happens outside the
//! storage backends; the score engine is pure.

mod model;
mod scores;
mod storage;
mod store;
mod targets;

pub use model::{DailyRecord, Exercise, Scores, Task, Workout};
pub use scores::{fitness_score, food_score, sleep_score, tasks_score};
pub use storage::{Collection, DailyMap, JsonFileCollection, MemoryCollection};
pub use store::DailyStore;
pub use targets::nutrient_targets;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium exists but cannot be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(std::io::Error),

    /// The backing medium holds something that is not a record collection.
    #[error("stored collection is corrupt: {0}")]
    Corrupt(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
