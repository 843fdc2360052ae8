use crate::routes;

/// GET /health handler - Liveness check
///
/// Always answers `OK` as plain text; does not touch the store or the
/// request counter.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler() -> &'static str {
    tracing::debug!("Health check passed");
    "OK"
}
