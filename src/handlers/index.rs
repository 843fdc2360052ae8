use anyhow::Result;
use serde_json::Value as JsonValue;
use sysinfo::System;

use crate::args::Args;
use crate::models::IndexResponse;
use crate::routes;
use crate::store::ItemStore;

/// GET / handler - Service metadata
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Service name, version and host", body = IndexResponse)
    ),
    tag = "items"
)]
pub fn index_handler(_store: &ItemStore, _args: &Args) -> Result<JsonValue> {
    let response = IndexResponse {
        name: "Rust REST API Example".to_string(),
        summary: "Simple REST API over an in-memory item store".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
    };
    Ok(serde_json::to_value(response)?)
}
