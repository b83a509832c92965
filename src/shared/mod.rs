//! Shared scalar wrapper newtypes used across all domain modules.
//!
//! The v20 API encodes every price, amount, unit count, and identifier as a
//! JSON string. Each wrapper here is a pure value object around that wire
//! string: it serializes/deserializes byte-for-byte as the backend sent it,
//! while exposing domain semantics (decimal comparison, client-assignment
//! predicates) in code. Conversion is always explicit through [`FromWire`]
//! and [`ToWire`] — there is no implicit string coercion anywhere.

pub mod specifier;

pub use specifier::{OrderSpecifier, TradeSpecifier};

use crate::error::ConversionError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;

/// Encode a value into its wire-string form.
pub trait ToWire {
    fn to_wire(&self) -> String;
}

/// Decode a value from its wire-string form.
///
/// Numeric wrappers fail with [`ConversionError::InvalidDecimal`] on
/// non-decimal input (including the empty string). Identifier wrappers never
/// fail — the API permits empty/omitted identifiers in some contexts.
pub trait FromWire: Sized {
    fn from_wire(s: &str) -> Result<Self, ConversionError>;
}

// Plain strings pass through unchanged (free-form filters, aliases).
impl ToWire for String {
    fn to_wire(&self) -> String {
        self.clone()
    }
}

// ─── Numeric wrappers ────────────────────────────────────────────────────────

macro_rules! decimal_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// Holds the canonical wire string exactly as received alongside the
        /// parsed decimal, so re-encoding never reformats (no trailing-zero
        /// trimming, no re-rounding). Equality and ordering compare the
        /// decoded decimal value.
        #[derive(Debug, Clone)]
        pub struct $name {
            text: String,
            value: Decimal,
        }

        impl $name {
            /// The decoded arbitrary-precision decimal value.
            pub fn value(&self) -> Decimal {
                self.value
            }

            /// The canonical wire string.
            pub fn as_str(&self) -> &str {
                &self.text
            }
        }

        impl FromWire for $name {
            fn from_wire(s: &str) -> Result<Self, ConversionError> {
                let value = Decimal::from_str(s).map_err(|e| {
                    ConversionError::InvalidDecimal {
                        input: s.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Self {
                    text: s.to_string(),
                    value,
                })
            }
        }

        impl ToWire for $name {
            fn to_wire(&self) -> String {
                self.text.clone()
            }
        }

        impl From<Decimal> for $name {
            fn from(value: Decimal) -> Self {
                Self {
                    text: value.to_string(),
                    value,
                }
            }
        }

        impl FromStr for $name {
            type Err = ConversionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.text)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.text)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_wire(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

decimal_wrapper!(
    /// A generic string-encoded decimal number.
    DecimalNumber
);

decimal_wrapper!(
    /// The price of an instrument (e.g. `"1.21457"`).
    PriceValue
);

decimal_wrapper!(
    /// A quantity of an account's home currency (e.g. `"100000.00"`).
    AccountUnits
);

decimal_wrapper!(
    /// A number of units of a trade or order. Positive is long, negative is
    /// short (e.g. `"-150"`).
    Units
);

// ─── Identifier wrappers ─────────────────────────────────────────────────────

macro_rules! identifier_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl FromWire for $name {
            fn from_wire(s: &str) -> Result<Self, ConversionError> {
                Ok(Self(s.to_string()))
            }
        }

        impl ToWire for $name {
            fn to_wire(&self) -> String {
                self.0.clone()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

identifier_wrapper!(
    /// An account identifier (e.g. `"001-001-1234567-001"`).
    AccountId
);

identifier_wrapper!(
    /// A platform-assigned order identifier.
    OrderId
);

identifier_wrapper!(
    /// A platform-assigned trade identifier.
    TradeId
);

identifier_wrapper!(
    /// A platform-assigned transaction identifier.
    TransactionId
);

identifier_wrapper!(
    /// An instrument name (e.g. `"EUR_USD"`).
    InstrumentName
);

identifier_wrapper!(
    /// A client-provided identifier attached to orders and trades.
    ClientId
);

// ─── DateTimeValue ───────────────────────────────────────────────────────────

/// A string-encoded point in time.
///
/// The wire form is either RFC 3339 (`"2018-09-20T21:38:23.051Z"`) or epoch
/// seconds with a fractional part (`"1537479503.051"`), depending on the
/// `Accept-Datetime-Format` header the request carried. Both decode to the
/// same instant; the canonical text is kept verbatim for re-encoding.
#[derive(Debug, Clone)]
pub struct DateTimeValue {
    text: String,
    value: chrono::DateTime<chrono::Utc>,
}

impl DateTimeValue {
    /// The decoded instant.
    pub fn value(&self) -> chrono::DateTime<chrono::Utc> {
        self.value
    }

    /// The canonical wire string.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromWire for DateTimeValue {
    fn from_wire(s: &str) -> Result<Self, ConversionError> {
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(s) {
            return Ok(Self {
                text: s.to_string(),
                value: parsed.with_timezone(&chrono::Utc),
            });
        }
        // Epoch seconds with optional fractional part.
        let seconds = Decimal::from_str(s)
            .map_err(|_| ConversionError::InvalidTimestamp { input: s.to_string() })?;
        let millis = (seconds * Decimal::from(1000))
            .trunc()
            .to_i64()
            .ok_or_else(|| ConversionError::InvalidTimestamp { input: s.to_string() })?;
        let value = chrono::DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| ConversionError::InvalidTimestamp { input: s.to_string() })?;
        Ok(Self {
            text: s.to_string(),
            value,
        })
    }
}

impl ToWire for DateTimeValue {
    fn to_wire(&self) -> String {
        self.text.clone()
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTimeValue {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            text: value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
            value,
        }
    }
}

impl PartialEq for DateTimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DateTimeValue {}

impl PartialOrd for DateTimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl std::fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for DateTimeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for DateTimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_wire(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Accept-Datetime-Format ──────────────────────────────────────────────────

/// Format of DateTime fields in requests and responses, selected per request
/// via the `Accept-Datetime-Format` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptDatetimeFormat {
    /// Epoch seconds with fractional part (e.g. `"1537479503.051"`).
    #[serde(rename = "UNIX")]
    Unix,
    /// RFC 3339 / ISO 8601 (e.g. `"2018-09-20T21:38:23.051Z"`).
    #[default]
    #[serde(rename = "RFC3339")]
    Rfc3339,
}

impl AcceptDatetimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "UNIX",
            Self::Rfc3339 => "RFC3339",
        }
    }
}

impl ToWire for AcceptDatetimeFormat {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_value_round_trip_preserves_text() {
        // Canonical wire text survives decode → encode untouched.
        let p = PriceValue::from_wire("1.21450").unwrap();
        assert_eq!(p.to_wire(), "1.21450");
        assert_eq!(p.as_str(), "1.21450");
    }

    #[test]
    fn test_price_value_equality_is_numeric() {
        let a = PriceValue::from_wire("1.10").unwrap();
        let b = PriceValue::from_wire("1.1").unwrap();
        assert_eq!(a, b);
        assert_eq!(b.to_wire(), "1.1");
    }

    #[test]
    fn test_units_parse_negative() {
        let u = Units::from_wire("-150").unwrap();
        assert!(u.value() < Decimal::ZERO);
        assert_eq!(u.to_wire(), "-150");
    }

    #[test]
    fn test_numeric_rejects_garbage() {
        assert!(matches!(
            AccountUnits::from_wire("12x.4"),
            Err(ConversionError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_numeric_rejects_empty() {
        assert!(matches!(
            DecimalNumber::from_wire(""),
            Err(ConversionError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_identifier_allows_empty() {
        let id = OrderId::from_wire("").unwrap();
        assert!(id.is_empty());
        assert_eq!(id.to_wire(), "");
    }

    #[test]
    fn test_plain_string_encodes_verbatim() {
        let alias = "Primary Account".to_string();
        assert_eq!(alias.to_wire(), "Primary Account");
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let id = AccountId::from("001-001-1234567-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"001-001-1234567-001\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_price_value_deserialize_rejects_garbage() {
        let result: Result<PriceValue, _> = serde_json::from_str("\"abc\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_price_value_serde_keeps_trailing_zeros() {
        let p: PriceValue = serde_json::from_str("\"1.2000\"").unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"1.2000\"");
    }

    #[test]
    fn test_datetime_rfc3339_round_trip() {
        let t = DateTimeValue::from_wire("2018-09-20T21:38:23.051Z").unwrap();
        assert_eq!(t.to_wire(), "2018-09-20T21:38:23.051Z");
        assert_eq!(t.value().timestamp_millis(), 1537479503051);
    }

    #[test]
    fn test_datetime_unix_round_trip() {
        let t = DateTimeValue::from_wire("1537479503.051").unwrap();
        assert_eq!(t.to_wire(), "1537479503.051");

        let rfc = DateTimeValue::from_wire("2018-09-20T21:38:23.051Z").unwrap();
        // Same instant in both wire formats.
        assert_eq!(t, rfc);
    }

    #[test]
    fn test_datetime_rejects_garbage() {
        assert!(matches!(
            DateTimeValue::from_wire("yesterday"),
            Err(ConversionError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_accept_datetime_format_wire_names() {
        assert_eq!(AcceptDatetimeFormat::Unix.to_wire(), "UNIX");
        assert_eq!(AcceptDatetimeFormat::Rfc3339.to_wire(), "RFC3339");
    }
}
