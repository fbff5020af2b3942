use std::sync::Arc;

use storage::ScoreStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScoreStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    pub fn shared_store(&self) -> Arc<dyn ScoreStore> {
        Arc::clone(&self.store)
    }
}
