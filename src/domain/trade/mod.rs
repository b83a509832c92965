//! Trade domain: open and historical trades.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::Trade;

use crate::shared::{DecimalNumber, ToWire};
use serde::{Deserialize, Serialize, Serializer};

/// The current state of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeState {
    Open,
    Closed,
    CloseWhenTradeable,
}

/// State filter for trade list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStateFilter {
    #[default]
    Open,
    Closed,
    CloseWhenTradeable,
    All,
}

impl TradeStateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::CloseWhenTradeable => "CLOSE_WHEN_TRADEABLE",
            Self::All => "ALL",
        }
    }
}

impl ToWire for TradeStateFilter {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// How much of a trade to close: everything, or a specific number of units.
///
/// Serializes as the string `"ALL"` or the decimal's wire form.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeCloseUnits {
    All,
    Units(DecimalNumber),
}

impl Serialize for TradeCloseUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str("ALL"),
            Self::Units(units) => serializer.serialize_str(units.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FromWire;

    #[test]
    fn test_trade_close_units_wire_forms() {
        assert_eq!(
            serde_json::to_string(&TradeCloseUnits::All).unwrap(),
            "\"ALL\""
        );
        let partial = TradeCloseUnits::Units(DecimalNumber::from_wire("50").unwrap());
        assert_eq!(serde_json::to_string(&partial).unwrap(), "\"50\"");
    }

    #[test]
    fn test_trade_state_filter_wire_names() {
        assert_eq!(TradeStateFilter::CloseWhenTradeable.to_wire(), "CLOSE_WHEN_TRADEABLE");
    }
}
