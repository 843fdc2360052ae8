use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{api_handler, health_handler, metrics_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the HTTP router.
///
/// `/health` and `/metrics` are answered here directly for GET; every
/// other request (including other methods on those paths) goes through
/// the dispatcher.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler).fallback(api_handler))
        .route(routes::METRICS, get(metrics_handler).fallback(api_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(api_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
