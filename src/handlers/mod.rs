pub mod add;
pub mod api;
pub mod delete;
pub mod health;
pub mod index;
pub mod list;
pub mod metrics;
pub mod search;

pub use add::add_handler;
pub use api::api_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use list::list_handler;
pub use metrics::metrics_handler;
pub use search::search_handler;

use axum::http::Method;

use crate::router::RouteTable;
use crate::routes;

/// Route table for every dispatched endpoint, built once at startup
pub fn route_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.register(Method::GET, routes::INDEX, index_handler);
    table.register(Method::GET, routes::LIST, list_handler);
    table.register(Method::GET, routes::SEARCH, search_handler);
    table.register(Method::POST, routes::ADD, add_handler);
    table.register(Method::POST, routes::DELETE, delete_handler);
    table
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    use crate::app::build_router;
    use crate::state::AppState;

    pub fn setup_test_app() -> (Router, AppState) {
        let state = AppState::new();
        (build_router(state.clone()), state)
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn post_json(app: &Router, uri: &str, body: &JsonValue) -> (StatusCode, JsonValue) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn read_json(response: axum::response::Response) -> (StatusCode, JsonValue) {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}
