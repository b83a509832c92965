//! Order and trade specifiers.
//!
//! A specifier refers to an order or trade either by its platform-assigned
//! identifier or by its client-provided identifier. On the wire a
//! client-assigned specifier carries a leading `@` sentinel (`"@myOrder42"`);
//! a platform-assigned one is the bare identifier (`"6372"`).

use crate::error::ConversionError;
use crate::shared::{ClientId, FromWire, OrderId, ToWire, TradeId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! specifier_wrapper {
    ($(#[$meta:meta])* $name:ident, platform: $platform_id:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            id: String,
            client_assigned: bool,
        }

        impl $name {
            /// Specifier for a platform-assigned identifier.
            pub fn platform(id: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    client_assigned: false,
                }
            }

            /// Specifier for a client-provided identifier. The `@` sentinel
            /// is added on encode, not stored.
            pub fn client(id: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    client_assigned: true,
                }
            }

            /// Whether this specifier refers to a client-provided identifier.
            pub fn is_client_assigned(&self) -> bool {
                self.client_assigned
            }

            /// The bare identifier, without the sentinel.
            pub fn as_str(&self) -> &str {
                &self.id
            }
        }

        impl FromWire for $name {
            fn from_wire(s: &str) -> Result<Self, ConversionError> {
                // Client-assignment is derived from the leading sentinel, then
                // every `@` occurrence is stripped before normalizing. This
                // matches the platform's observed handling of malformed
                // interior sentinels; they are normalized away, not rejected.
                let client_assigned = s.starts_with('@');
                Ok(Self {
                    id: s.replace('@', ""),
                    client_assigned,
                })
            }
        }

        impl ToWire for $name {
            fn to_wire(&self) -> String {
                if self.client_assigned {
                    format!("@{}", self.id)
                } else {
                    self.id.clone()
                }
            }
        }

        impl From<$platform_id> for $name {
            fn from(id: $platform_id) -> Self {
                Self::platform(id.to_wire())
            }
        }

        impl From<ClientId> for $name {
            fn from(id: ClientId) -> Self {
                Self::client(id.to_wire())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.to_wire())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_wire())
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

specifier_wrapper!(
    /// Refers to an order by platform identifier or `@`-prefixed client id.
    OrderSpecifier,
    platform: OrderId
);

specifier_wrapper!(
    /// Refers to a trade by platform identifier or `@`-prefixed client id.
    TradeSpecifier,
    platform: TradeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_assigned_round_trip() {
        let spec = OrderSpecifier::from_wire("@myOrder42").unwrap();
        assert!(spec.is_client_assigned());
        assert_eq!(spec.as_str(), "myOrder42");
        assert_eq!(spec.to_wire(), "@myOrder42");
    }

    #[test]
    fn test_platform_assigned_round_trip() {
        let spec = OrderSpecifier::from_wire("6372").unwrap();
        assert!(!spec.is_client_assigned());
        assert_eq!(spec.as_str(), "6372");
        assert_eq!(spec.to_wire(), "6372");
    }

    #[test]
    fn test_interior_sentinels_stripped() {
        // Every `@` is removed before normalizing, not only the leading one.
        let spec = TradeSpecifier::from_wire("@my@Trade").unwrap();
        assert!(spec.is_client_assigned());
        assert_eq!(spec.as_str(), "myTrade");
        assert_eq!(spec.to_wire(), "@myTrade");
    }

    #[test]
    fn test_empty_specifier_allowed() {
        let spec = OrderSpecifier::from_wire("").unwrap();
        assert!(!spec.is_client_assigned());
        assert_eq!(spec.as_str(), "");
    }

    #[test]
    fn test_from_order_id() {
        let spec = OrderSpecifier::from(OrderId::from("6372"));
        assert!(!spec.is_client_assigned());
        assert_eq!(spec.to_wire(), "6372");
    }

    #[test]
    fn test_from_client_id() {
        let spec = TradeSpecifier::from(ClientId::from("myTrade7"));
        assert!(spec.is_client_assigned());
        assert_eq!(spec.to_wire(), "@myTrade7");
    }

    #[test]
    fn test_serde_round_trip() {
        let spec: OrderSpecifier = serde_json::from_str("\"@myOrder42\"").unwrap();
        assert_eq!(serde_json::to_string(&spec).unwrap(), "\"@myOrder42\"");
    }
}
