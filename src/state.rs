use std::sync::Arc;

use crate::config::Config;
use crate::store::{MemoryStore, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build the default state with an in-memory session store.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemoryStore::new()),
        }
    }
}
