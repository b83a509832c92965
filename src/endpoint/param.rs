//! Field declarations: where a model field's value goes on the wire.

use crate::error::ConversionError;

/// Placement of a field's value in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into a `{name}` placeholder of the route template.
    UrlSegment,
    /// Appended to the query string, in declaration order.
    Query,
    /// Written into the header map, in declaration order.
    Header,
    /// Merged into the single request body document under the wire name.
    Body,
}

/// A value transform applied before encoding. Transforms are idempotent and
/// cannot fail the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Clamp a count parameter to the endpoint's declared maximum.
    ClampCount { max: u32 },
}

impl Transform {
    pub fn apply(&self, value: FieldValue) -> FieldValue {
        match (self, value) {
            (Transform::ClampCount { max }, FieldValue::Count(n)) => {
                FieldValue::Count(n.min(*max))
            }
            // Clamping only applies to counts; other shapes pass through.
            (Transform::ClampCount { .. }, other) => other,
        }
    }
}

/// A field value read from a model instance, shaped for its placement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A wire-encoded scalar.
    Text(String),
    /// An unsigned count, clampable via [`Transform::ClampCount`].
    Count(u32),
    /// A list encoded as comma-separated values in query/header positions.
    List(Vec<String>),
    /// A document fragment for body placement.
    Json(serde_json::Value),
}

/// Result of reading one field from a model instance. `Ok(None)` means the
/// field is unset.
pub type ReadResult = Result<Option<FieldValue>, ConversionError>;

/// Reader function paired with each declaration: extracts the field's
/// current value from a model instance.
pub type Reader<M> = fn(&M) -> ReadResult;

/// Static metadata for one field of a request model.
///
/// Declarations are purely descriptive — validation lives in the builder.
#[derive(Debug)]
pub struct FieldSpec<M> {
    pub wire_name: &'static str,
    pub placement: Placement,
    pub required: bool,
    pub transform: Option<Transform>,
    pub read: Reader<M>,
}

impl<M> FieldSpec<M> {
    pub const fn url_segment(wire_name: &'static str, read: Reader<M>) -> Self {
        Self::new(wire_name, Placement::UrlSegment, read)
    }

    pub const fn query(wire_name: &'static str, read: Reader<M>) -> Self {
        Self::new(wire_name, Placement::Query, read)
    }

    pub const fn header(wire_name: &'static str, read: Reader<M>) -> Self {
        Self::new(wire_name, Placement::Header, read)
    }

    pub const fn body(wire_name: &'static str, read: Reader<M>) -> Self {
        Self::new(wire_name, Placement::Body, read)
    }

    const fn new(wire_name: &'static str, placement: Placement, read: Reader<M>) -> Self {
        Self {
            wire_name,
            placement,
            required: false,
            transform: None,
            read,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn clamped(mut self, max: u32) -> Self {
        self.transform = Some(Transform::ClampCount { max });
        self
    }
}

/// Reader helpers used inside `FIELDS` tables.
pub mod field {
    use super::{FieldValue, ReadResult};
    use crate::error::ConversionError;
    use crate::shared::ToWire;
    use serde::Serialize;

    /// Read an optional wire-encodable scalar.
    pub fn text<T: ToWire>(value: &Option<T>) -> ReadResult {
        Ok(value.as_ref().map(|v| FieldValue::Text(v.to_wire())))
    }

    /// Read an optional count parameter.
    pub fn count(value: &Option<u32>) -> ReadResult {
        Ok(value.map(FieldValue::Count))
    }

    /// Read an optional list of wire-encodable scalars.
    pub fn list<T: ToWire>(value: &Option<Vec<T>>) -> ReadResult {
        Ok(value
            .as_ref()
            .map(|items| FieldValue::List(items.iter().map(ToWire::to_wire).collect())))
    }

    /// Read an optional boolean flag (encoded as `true`/`false`).
    pub fn flag(value: &Option<bool>) -> ReadResult {
        Ok(value.map(|b| FieldValue::Text(b.to_string())))
    }

    /// Read an optional body member, serialized to a document fragment.
    pub fn body<T: Serialize>(wire_name: &'static str, value: &Option<T>) -> ReadResult {
        match value {
            None => Ok(None),
            Some(v) => serde_json::to_value(v)
                .map(|json| Some(FieldValue::Json(json)))
                .map_err(|e| ConversionError::BodySerialization {
                    field: wire_name,
                    reason: e.to_string(),
                }),
        }
    }
}
