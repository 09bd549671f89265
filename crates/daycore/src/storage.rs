//! Collection snapshot backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::model::DailyRecord;
use crate::{Result, StoreError};

/// The full persisted collection: date key -> day record.
pub type DailyMap = BTreeMap<String, DailyRecord>;

/// Whole-document snapshot storage. `load` hands back the entire collection,
/// `save` replaces it; there is no per-key access.
pub trait Collection: Send + Sync {
    fn load(&self) -> Result<DailyMap>;
    fn save(&self, records: &DailyMap) -> Result<()>;
}

/// One JSON file holding the whole collection. A missing file is the empty
/// collection (first run); every other failure is surfaced.
pub struct JsonFileCollection {
    path: PathBuf,
}

impl JsonFileCollection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Collection for JsonFileCollection {
    fn load(&self) -> Result<DailyMap> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DailyMap::new()),
            Err(e) => return Err(StoreError::Unavailable(e)),
        };
        serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)
    }

    fn save(&self, records: &DailyMap) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(StoreError::Corrupt)?;
        // tmp + rename: a load never observes a half-written document
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(StoreError::Unavailable)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Unavailable)
    }
}

/// In-memory collection (for testing and demos).
#[derive(Default)]
pub struct MemoryCollection {
    data: RwLock<DailyMap>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collection for MemoryCollection {
    fn load(&self) -> Result<DailyMap> {
        Ok(self.data.read().unwrap().clone())
    }

    fn save(&self, records: &DailyMap) -> Result<()> {
        *self.data.write().unwrap() = records.clone();
        Ok(())
    }
}
