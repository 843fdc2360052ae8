use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Serialize `body` as pretty-printed JSON with a four-space indent
pub fn to_pretty_json<T: Serialize>(body: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    body.serialize(&mut serializer)?;
    Ok(buf)
}

/// Build a JSON response with the given status
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match to_pretty_json(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"error": "failed to serialize response"}"#,
            )
                .into_response()
        }
    }
}
