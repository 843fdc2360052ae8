use std::collections::HashMap;

use anyhow::Result;
use axum::http::Method;
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::store::ItemStore;

/// Signature shared by every business endpoint
pub type Handler = fn(&ItemStore, &Args) -> Result<JsonValue>;

/// Exact-match table from (method, path) to handler
///
/// Paths are compared verbatim: no parameters, no wildcards, and a trailing
/// slash makes a different route.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<(Method, String), Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`, replacing any handler already at this route
    pub fn register(&mut self, method: Method, path: impl Into<String>, handler: Handler) {
        let path = path.into();
        if self.routes.insert((method.clone(), path.clone()), handler).is_some() {
            tracing::debug!("Replaced handler for {} {}", method, path);
        }
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Option<Handler> {
        self.routes.get(&(method.clone(), path.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut routes: Vec<String> = self
            .routes
            .keys()
            .map(|(method, path)| format!("{} {}", method, path))
            .collect();
        routes.sort();
        f.debug_struct("RouteTable").field("routes", &routes).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn first(_: &ItemStore, _: &Args) -> Result<JsonValue> {
        Ok(json!("first"))
    }

    fn second(_: &ItemStore, _: &Args) -> Result<JsonValue> {
        Ok(json!("second"))
    }

    fn call(handler: Handler) -> JsonValue {
        handler(&ItemStore::default(), &Args::default()).unwrap()
    }

    #[test]
    fn test_lookup_returns_registered_handler() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/list", first);
        table.register(Method::POST, "/list", second);

        assert_eq!(call(table.lookup(&Method::GET, "/list").unwrap()), json!("first"));
        assert_eq!(call(table.lookup(&Method::POST, "/list").unwrap()), json!("second"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/", first);
        table.register(Method::GET, "/", second);

        assert_eq!(table.len(), 1);
        assert_eq!(call(table.lookup(&Method::GET, "/").unwrap()), json!("second"));
    }

    #[test]
    fn test_paths_match_exactly() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/list", first);

        assert!(table.lookup(&Method::GET, "/list/").is_none());
        assert!(table.lookup(&Method::GET, "list").is_none());
        assert!(table.lookup(&Method::GET, "/List").is_none());
        assert!(table.lookup(&Method::POST, "/list").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.lookup(&Method::GET, "/").is_none());
    }
}
