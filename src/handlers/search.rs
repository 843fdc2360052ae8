use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::error::ErrorResponse;
use crate::models::ListResponse;
use crate::routes;
use crate::store::ItemStore;

/// GET /search handler - Items whose name contains `q`
///
/// Matching is a case-sensitive substring test. A missing `q` is reported
/// in the payload, not through the status code.
#[utoipa::path(
    get,
    path = routes::SEARCH,
    params(
        ("q" = String, Query, description = "Substring to look for in item names")
    ),
    responses(
        (status = 200, description = "Matching items, or an error payload when q is missing", body = ListResponse),
        (status = 500, description = "q given more than once", body = ErrorResponse)
    ),
    tag = "items"
)]
pub fn search_handler(store: &ItemStore, args: &Args) -> Result<JsonValue> {
    let Some(query) = args.get_str("q")? else {
        return Ok(ErrorResponse::new("q parameter required").into_value());
    };

    let items = store.search(query)?;
    Ok(serde_json::to_value(ListResponse {
        count: items.len(),
        items,
    })?)
}
