use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{AddRequest, DeleteRequest, DeletedResponse, IndexResponse, Item, ListResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-item-api",
        version = "1.0.0",
        description = "A small JSON API over an in-memory item collection"
    ),
    paths(
        handlers::health::health_handler,
        handlers::metrics::metrics_handler,
        handlers::index::index_handler,
        handlers::list::list_handler,
        handlers::search::search_handler,
        handlers::add::add_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            IndexResponse,
            ListResponse,
            AddRequest,
            DeleteRequest,
            DeletedResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and metrics"),
        (name = "items", description = "Item collection operations")
    )
)]
pub struct ApiDoc;
