//! GraphQL wire types and response classification.
//!
//! Every operation goes through the same decode path: parse the
//! `{data, errors}` envelope, surface GraphQL-level errors first, then
//! walk to the expected payload key. The precedence here is load
//! bearing: an error response legitimately carries null `data`, so
//! `errors` must be checked before any missing-data check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PodApiError;

/// GraphQL request body.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    pub variables: V,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

/// One entry in the envelope's `errors` list.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLError {
    pub message: String,
}

/// Parse the envelope and return its `data` object.
///
/// Fails with `Decode` on malformed JSON, `GraphQL` when the `errors`
/// list is non-empty (an empty list is not a failure), and
/// `MissingData` when `data` is absent or null.
fn decode_data(body: &str) -> Result<Value, PodApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if let Some(errors) = envelope.errors {
        let mut messages = errors.into_iter().map(|e| e.message);
        if let Some(message) = messages.next() {
            return Err(PodApiError::GraphQL {
                message,
                additional: messages.collect(),
            });
        }
    }

    match envelope.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(PodApiError::MissingData {
            body: body.to_string(),
        }),
    }
}

/// Decode a response body and extract the payload at `path` under
/// `data`.
///
/// An absent or null value anywhere on the path counts as missing
/// data; the raw body is carried in the error for diagnostics.
pub(crate) fn decode_payload(body: &str, path: &[&str]) -> Result<Value, PodApiError> {
    let data = decode_data(body)?;

    let mut node = &data;
    for segment in path {
        node = match node.get(segment) {
            Some(value) if !value.is_null() => value,
            _ => {
                return Err(PodApiError::MissingData {
                    body: body.to_string(),
                })
            }
        };
    }

    Ok(node.clone())
}

/// Decode a response body, requiring only that `key` is present under
/// `data`.
///
/// `podTerminate` declares no return fields, so its success payload is
/// `null`; presence of the key is the whole success signal.
pub(crate) fn decode_ack(body: &str, key: &str) -> Result<(), PodApiError> {
    let data = decode_data(body)?;

    match data.get(key) {
        Some(_) => Ok(()),
        None => Err(PodApiError::MissingData {
            body: body.to_string(),
        }),
    }
}
