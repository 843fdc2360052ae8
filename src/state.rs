use crate::dispatcher::Dispatcher;
use crate::handlers;
use crate::metrics::Metrics;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Build the route table and seed the store with the example items
    pub fn new() -> Self {
        Self::with_store(ItemStore::with_sample_data())
    }

    pub fn with_store(store: ItemStore) -> Self {
        let metrics = Arc::new(Metrics::new());
        let routes = handlers::route_table();
        tracing::info!("Registered {} API routes", routes.len());

        let dispatcher = Dispatcher::new(routes, store, Arc::clone(&metrics));
        match dispatcher.store().len() {
            Ok(count) => tracing::info!("Item store ready with {} items", count),
            Err(e) => tracing::warn!("Item store unavailable: {}", e),
        }

        Self {
            dispatcher: Arc::new(dispatcher),
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
