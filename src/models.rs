use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single entry in the item store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Response type for GET /
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexResponse {
    pub name: String,
    pub summary: String,
    pub version: String,
    pub hostname: String,
}

/// Response type for list and search endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub count: usize,
    pub items: Vec<Item>,
}

/// Request body for POST /add
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddRequest {
    pub name: String,
    pub description: String,
}

/// Request body for POST /delete
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteRequest {
    pub id: i64,
}

/// Response type for a successful delete; echoes the id as it was sent
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    #[schema(value_type = i64)]
    pub deleted: JsonValue,
}
