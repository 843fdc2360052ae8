//! Request argument normalization.
//!
//! GET query strings and POST JSON bodies both end up as an [`Args`]
//! value so handlers read their inputs the same way regardless of method.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use axum::extract::Query;
use axum::http::Uri;
use serde_json::{Map, Value as JsonValue};

/// Normalized request arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args(JsonValue);

impl Default for Args {
    fn default() -> Self {
        Args(JsonValue::Object(Map::new()))
    }
}

impl Args {
    /// Build arguments from decoded query pairs.
    ///
    /// Values for the same key are grouped in arrival order. A key with one
    /// value maps to that string; a repeated key maps to an array of strings.
    /// Pairs with an empty value are dropped.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            grouped.entry(key).or_default().push(value);
        }

        let map = grouped
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    JsonValue::String(values.remove(0))
                } else {
                    JsonValue::Array(values.into_iter().map(JsonValue::String).collect())
                };
                (key, value)
            })
            .collect();

        Args(JsonValue::Object(map))
    }

    /// Parse the query string of a request URI
    pub fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Self::from_query_pairs(pairs)
    }

    /// Decode a JSON request body; any JSON value is accepted here
    pub fn from_json_body(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body).map(Args)
    }

    /// Look up `key`, treating JSON `null` as absent.
    ///
    /// Fails when the arguments are not a JSON object (e.g. a POST body
    /// that was an array).
    pub fn get(&self, key: &str) -> Result<Option<&JsonValue>> {
        match &self.0 {
            JsonValue::Object(map) => Ok(map.get(key).filter(|value| !value.is_null())),
            other => Err(anyhow!(
                "request arguments must be a JSON object, got {}",
                json_type_name(other)
            )),
        }
    }

    /// Look up `key` and require it to be a single string
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key)? {
            None => Ok(None),
            Some(JsonValue::String(value)) => Ok(Some(value)),
            Some(other) => Err(anyhow!(
                "argument '{}' must be a string, got {}",
                key,
                json_type_name(other)
            )),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
