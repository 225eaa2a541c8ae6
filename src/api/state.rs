use std::sync::Arc;

use crate::db::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Creates application state over any store implementation
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
