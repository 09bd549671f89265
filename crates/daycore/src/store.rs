use crate::model::{DailyRecord, Scores};
use crate::storage::Collection;
use crate::targets::nutrient_targets;
use crate::Result;

/// Keyed store of day records over a snapshot backend.
///
/// Every call loads the full collection and (for writes) persists it back
/// whole. Nothing is cached between calls, so two stores over the same file
/// see each other's writes; overlapping writes can still lose an update,
/// which the single-user scope accepts.
pub struct DailyStore<C: Collection> {
    backend: C,
}

impl<C: Collection> DailyStore<C> {
    pub fn new(backend: C) -> Self {
        Self { backend }
    }

    /// The record for `date`, or a zero default if none was ever written.
    /// The default is not persisted.
    pub fn get(&self, date: &str) -> Result<DailyRecord> {
        let records = self.backend.load()?;
        Ok(records
            .get(date)
            .cloned()
            .unwrap_or_else(|| DailyRecord::empty(date)))
    }

    /// Replace the record for `date` with `payload`, wholesale. The stored
    /// `date` and `scores` come from the key and the score engine; whatever
    /// the client put in those fields is discarded.
    pub fn upsert(&self, date: &str, mut payload: DailyRecord) -> Result<DailyRecord> {
        let mut records = self.backend.load()?;
        payload.scores = Scores::compute(&payload, &nutrient_targets());
        payload.date = date.to_string();
        records.insert(date.to_string(), payload.clone());
        self.backend.save(&records)?;
        Ok(payload)
    }
}
