//! Error types for pod API operations.

use thiserror::Error;

/// Errors that can occur while talking to the pod API.
///
/// The variants mirror the order in which a response is classified:
/// transport failure, bad status code, unreadable body, malformed
/// envelope, GraphQL-level errors, missing data, unexpected payload
/// shape. Exactly one of these is produced per failed call and nothing
/// is retried internally.
#[derive(Error, Debug)]
pub enum PodApiError {
    /// The HTTP request could not be sent.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-200 status code.
    #[error("unexpected status code {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, empty if it could not be read.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The response body is not a valid GraphQL envelope.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported GraphQL-level errors.
    ///
    /// Only the first message is surfaced through `Display`. The
    /// remaining messages are kept in `additional` for diagnostics.
    #[error("{message}")]
    GraphQL {
        /// First error message, verbatim.
        message: String,
        /// Any further error messages from the same response.
        additional: Vec<String>,
    },

    /// The envelope parsed but the expected data was absent or null.
    #[error("no data in response: {body}")]
    MissingData {
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The expected payload key was present but its value does not
    /// match the operation's declared result type.
    #[error("unexpected shape for `{field}`: {source}")]
    ShapeMismatch {
        /// The payload key that failed to deserialize.
        field: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}
