use axum::{extract::State, http::header, response::IntoResponse};

use crate::metrics::CONTENT_TYPE;
use crate::routes;
use crate::state::AppState;

/// GET /metrics handler - Prometheus scrape endpoint
///
/// Refreshes the CPU and RAM gauges before rendering.
#[utoipa::path(
    get,
    path = routes::METRICS,
    responses(
        (status = 200, description = "Metrics in the text exposition format", body = String, content_type = "text/plain; version=0.0.4; charset=utf-8")
    ),
    tag = "health"
)]
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.refresh_system_gauges();
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], state.metrics.render())
}
