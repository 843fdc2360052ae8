use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::error::ErrorResponse;
use crate::models::{DeleteRequest, DeletedResponse};
use crate::routes;
use crate::store::ItemStore;

/// POST /delete handler - Remove the first item with the given id
///
/// The id is compared as sent: numbers match numerically, a string such
/// as `"1000"` never matches.
#[utoipa::path(
    post,
    path = routes::DELETE,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "The deleted id, or an error payload when the id is missing or unknown", body = DeletedResponse),
        (status = 400, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 500, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "items"
)]
pub fn delete_handler(store: &ItemStore, args: &Args) -> Result<JsonValue> {
    let Some(requested) = args.get("id")? else {
        return Ok(ErrorResponse::new("id parameter required").into_value());
    };

    match store.remove_first(|item| id_matches(requested, item.id))? {
        Some(_) => Ok(serde_json::to_value(DeletedResponse {
            deleted: requested.clone(),
        })?),
        None => Ok(ErrorResponse::new(format!(
            "item not found with id {}",
            display_id(requested)
        ))
        .into_value()),
    }
}

fn id_matches(requested: &JsonValue, id: i64) -> bool {
    match requested {
        JsonValue::Number(number) => match number.as_i64() {
            Some(value) => value == id,
            None => number.as_f64() == Some(id as f64),
        },
        _ => false,
    }
}

/// Render the id for messages without JSON quoting for strings
fn display_id(requested: &JsonValue) -> String {
    match requested {
        JsonValue::String(value) => value.clone(),
        other => other.to_string(),
    }
}
