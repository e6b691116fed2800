// Application state module
// Shared handle passed to both listeners

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::catalog::CatalogStore;

/// Application state
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogStore,
    /// Notified once on Ctrl-C; both accept loops exit on it
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config, catalog: CatalogStore) -> Self {
        Self {
            config: config.clone(),
            catalog,
            shutdown: Arc::new(Notify::new()),
        }
    }
}
