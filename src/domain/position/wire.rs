//! Wire types for positions.

use crate::shared::{AccountUnits, InstrumentName, PriceValue, TradeId, Units};
use serde::Deserialize;

/// One side (long or short) of an instrument's position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSide {
    /// Net units held on this side; zero when the side is flat.
    pub units: Units,
    /// Volume-weighted average entry price of the open trades.
    pub average_price: Option<PriceValue>,
    #[serde(rename = "tradeIDs")]
    pub trade_ids: Option<Vec<TradeId>>,
    #[serde(rename = "pl")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL")]
    pub resettable_pl: Option<AccountUnits>,
}

/// The aggregate position for one instrument in an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub instrument: InstrumentName,
    #[serde(rename = "pl")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL")]
    pub resettable_pl: Option<AccountUnits>,
    pub commission: Option<AccountUnits>,
    pub long: PositionSide,
    pub short: PositionSide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FromWire;

    #[test]
    fn test_position_decodes_both_sides() {
        let json = r#"{
            "instrument": "EUR_USD",
            "pl": "-54.2531",
            "unrealizedPL": "0.0000",
            "long": {
                "units": "100",
                "averagePrice": "1.14502",
                "tradeIDs": ["6358"],
                "pl": "0.0000"
            },
            "short": {
                "units": "0",
                "pl": "-54.2531"
            }
        }"#;

        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.long.units, Units::from_wire("100").unwrap());
        assert_eq!(position.short.units, Units::from_wire("0").unwrap());
        assert!(position.short.average_price.is_none());
    }
}
