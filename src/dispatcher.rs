use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::router::RouteTable;
use crate::store::ItemStore;

/// Resolves routes and turns handler results into (status, body) pairs
///
/// Owns the route table and the item store; both are fixed for the life of
/// the dispatcher, only the store's contents change.
#[derive(Debug)]
pub struct Dispatcher {
    routes: RouteTable,
    store: ItemStore,
    metrics: Arc<Metrics>,
}

impl Dispatcher {
    pub fn new(routes: RouteTable, store: ItemStore, metrics: Arc<Metrics>) -> Self {
        if routes.is_empty() {
            tracing::warn!("Dispatcher created with no routes; every request will 404");
        }
        Self {
            routes,
            store,
            metrics,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Dispatch one API request.
    ///
    /// Counts the request, then returns 200 with the handler's value, 404
    /// when no route matches, or 500 with the failure message when the
    /// handler fails.
    pub fn dispatch(&self, method: &Method, path: &str, args: &Args) -> (StatusCode, JsonValue) {
        self.metrics.record_request();

        match self.resolve(method, path, args) {
            Ok(body) => (StatusCode::OK, body),
            Err(err) => {
                match &err {
                    ApiError::NotFound => {
                        tracing::debug!("No route for {} {}", method, path);
                    }
                    other => {
                        tracing::error!("Handler for {} {} failed: {}", method, path, other.message());
                    }
                }
                err.into_parts()
            }
        }
    }

    fn resolve(&self, method: &Method, path: &str, args: &Args) -> Result<JsonValue, ApiError> {
        let handler = self
            .routes
            .lookup(method, path)
            .ok_or(ApiError::NotFound)?;
        Ok(handler(&self.store, args)?)
    }
}
