use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, Uri},
    response::Response,
};

use crate::args::Args;
use crate::error::ApiError;
use crate::response::json_response;
use crate::state::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Catch-all transport handler: normalize arguments, then dispatch
///
/// GET-style requests take their arguments from the query string. POST
/// requests must declare `Content-Type: application/json` exactly and carry
/// a JSON body; their query string is ignored.
pub async fn api_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let args = if method == Method::POST {
        post_args(&headers, &body)?
    } else {
        Args::from_uri(&uri)
    };

    let (status, body) = state.dispatcher.dispatch(&method, uri.path(), &args);
    Ok(json_response(status, &body))
}

fn post_args(headers: &HeaderMap, body: &[u8]) -> Result<Args, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if content_type != Some(JSON_CONTENT_TYPE) {
        tracing::debug!("Rejected POST with content type {:?}", content_type);
        return Err(ApiError::UnsupportedContentType);
    }

    Args::from_json_body(body).map_err(|err| {
        tracing::error!("Failed to decode JSON request body: {}", err);
        ApiError::from(err)
    })
}
