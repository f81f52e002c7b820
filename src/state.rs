use crate::config::Config;
use crate::quotes::QuoteStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub quotes: QuoteStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            quotes: QuoteStore::default(),
            config: Arc::new(config),
        }
    }
}
