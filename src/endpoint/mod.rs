//! The marshalling core: declarative request building and response decoding.
//!
//! Every API operation is a plain request model implementing [`Endpoint`]:
//! a route template, an HTTP verb, and a `const` table of [`FieldSpec`]
//! declarations saying where each field's value goes on the wire (URL
//! segment, query parameter, header, or body member). [`build`] turns a
//! populated model into an immutable [`WireRequest`]; [`decode_response`]
//! turns a raw status + body into the typed response model or a structured
//! error. Both are pure, synchronous functions over compile-time metadata —
//! no I/O, no locking, safe to call from any thread.

pub mod builder;
pub mod decode;
pub mod param;

pub use builder::{build, WireRequest};
pub use decode::decode_response;
pub use param::{field, FieldSpec, FieldValue, Placement, Transform};

use serde::de::DeserializeOwned;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the transport may retry this verb on transient failures.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One API operation: a request model plus its static wire metadata.
///
/// Field declarations are fixed at compile time. A model instance is
/// populated by the caller, handed to [`build`] once, and may be rebuilt
/// after re-population; it must not be mutated while a build is in progress.
pub trait Endpoint: Sized + 'static {
    /// The typed response model this operation decodes into.
    type Response: DeserializeOwned;

    const METHOD: Method;

    /// Route template with `{name}` placeholders for URL-segment fields.
    const PATH: &'static str;

    /// Ordered field declarations. Query parameters, headers, and body
    /// members are emitted in exactly this order.
    const FIELDS: &'static [FieldSpec<Self>];
}
