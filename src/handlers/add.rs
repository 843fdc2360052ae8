use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::args::Args;
use crate::error::ErrorResponse;
use crate::models::{AddRequest, Item};
use crate::routes;
use crate::store::ItemStore;

/// POST /add handler - Append a new item
///
/// The new id is the last item's id plus one (see [`ItemStore::next_id`]).
/// An empty store cannot assign an id, and that failure wins over missing
/// fields.
#[utoipa::path(
    post,
    path = routes::ADD,
    request_body = AddRequest,
    responses(
        (status = 200, description = "The created item, or an error payload when a field is missing", body = Item),
        (status = 400, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 500, description = "Malformed body or empty store", body = ErrorResponse)
    ),
    tag = "items"
)]
pub fn add_handler(store: &ItemStore, args: &Args) -> Result<JsonValue> {
    store.next_id()?;

    let (Some(name), Some(description)) = (args.get_str("name")?, args.get_str("description")?)
    else {
        return Ok(ErrorResponse::new("name and description are required").into_value());
    };

    let item = store.add(name, description)?;
    Ok(serde_json::to_value(item)?)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{get, post_json};
    use crate::models::{Item, ListResponse};
    use crate::state::AppState;
    use crate::store::ItemStore;
    use crate::app::build_router;
    use axum::http::StatusCode;
    use serde_json::json;

    fn setup_test_app() -> axum::Router {
        crate::handlers::test_support::setup_test_app().0
    }

    #[tokio::test]
    async fn test_add_endpoint_success() {
        let app = setup_test_app();

        let (status, body) =
            post_json(&app, "/add", &json!({"name": "fish", "description": "fish swims"})).await;

        assert_eq!(status, StatusCode::OK);
        let item: Item = serde_json::from_value(body).unwrap();
        assert_eq!(
            item,
            Item {
                id: 1003,
                name: "fish".to_string(),
                description: "fish swims".to_string(),
            }
        );

        let (_, body) = get(&app, "/list").await;
        let list: ListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(list.count, 4);
        assert_eq!(list.items.last(), Some(&item));
    }

    #[tokio::test]
    async fn test_add_requires_both_fields() {
        let app = setup_test_app();

        for body in [
            json!({"name": "fish"}),
            json!({"description": "fish swims"}),
            json!({}),
            json!({"name": null, "description": "fish swims"}),
        ] {
            let (status, response) = post_json(&app, "/add", &body).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(response, json!({"error": "name and description are required"}));
        }

        let (_, body) = get(&app, "/list").await;
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_add_accepts_empty_strings() {
        let app = setup_test_app();

        let (status, body) = post_json(&app, "/add", &json!({"name": "", "description": ""})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1003);
    }

    #[tokio::test]
    async fn test_add_rejects_non_string_fields() {
        let app = setup_test_app();

        let (status, body) = post_json(&app, "/add", &json!({"name": 7, "description": "x"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "argument 'name' must be a string, got number"}));
    }

    #[tokio::test]
    async fn test_add_after_deleting_last_item_reuses_id() {
        let app = setup_test_app();

        post_json(&app, "/delete", &json!({"id": 1002})).await;
        let (_, body) =
            post_json(&app, "/add", &json!({"name": "fish", "description": "fish swims"})).await;

        assert_eq!(body["id"], 1002);
    }

    #[tokio::test]
    async fn test_add_to_empty_store_fails() {
        let app = build_router(AppState::with_store(ItemStore::default()));

        let (status, body) = post_json(&app, "/add", &json!({})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "cannot assign an id: the item store is empty"})
        );
    }
}
