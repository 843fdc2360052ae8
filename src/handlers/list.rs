use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::models::ListResponse;
use crate::routes;
use crate::store::ItemStore;

/// GET /list handler - Every item, in store order
#[utoipa::path(
    get,
    path = routes::LIST,
    responses(
        (status = 200, description = "All items", body = ListResponse)
    ),
    tag = "items"
)]
pub fn list_handler(store: &ItemStore, _args: &Args) -> Result<JsonValue> {
    let items = store.all()?;
    tracing::debug!("Listed {} items", items.len());

    Ok(serde_json::to_value(ListResponse {
        count: items.len(),
        items,
    })?)
}
