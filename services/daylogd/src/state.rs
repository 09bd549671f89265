use std::sync::Arc;

use tokio::sync::RwLock;

use daycore::{DailyStore, JsonFileCollection};

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<RwLock<DailyStore<JsonFileCollection>>>,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        let store = DailyStore::new(JsonFileCollection::new(cfg.data_path.clone()));
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
