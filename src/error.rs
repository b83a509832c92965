//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("malformed response document: {0}")]
    Decode(String),

    /// The remote API rejected the operation. `code` and `message` are the
    /// remote's own values, passed through verbatim.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

/// Request-build errors. All indicate a caller or catalogue bug, are detected
/// before any network activity, and are never retried.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    /// A `{placeholder}` in the route template had no matching declared
    /// field. This is a catalogue definition bug, not a user error.
    #[error("unresolved placeholder `{{{placeholder}}}` in route `{path}`")]
    UnresolvedPlaceholder {
        path: &'static str,
        placeholder: String,
    },

    /// A field declared a value shape its placement cannot carry
    /// (e.g. a body document routed to a query parameter).
    #[error("field `{field}` holds a value unsupported by its placement")]
    InvalidPlacement { field: &'static str },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Malformed scalar values at wrapper-construction or body-encode time.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("invalid decimal `{input}`: {reason}")]
    InvalidDecimal { input: String, reason: String },

    #[error("invalid timestamp `{input}`: expected RFC 3339 or epoch seconds")]
    InvalidTimestamp { input: String },

    #[error("body serialization failed for `{field}`: {reason}")]
    BodySerialization { field: &'static str, reason: String },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
