use std::sync::Arc;

use crate::db::BookStore;

/// Shared handler context. The store is injected here instead of living in a
/// global so every router instance can run against its own database.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}
