use std::sync::Arc;

use crate::models::store::RecordStore;

pub type SharedStore = Arc<RecordStore>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub technician: Arc<str>,
}

impl AppState {
    pub fn new(store: RecordStore, technician: &str) -> Self {
        Self {
            store: Arc::new(store),
            technician: Arc::from(technician),
        }
    }
}
