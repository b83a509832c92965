//! Wire types for prices and candlesticks.

use crate::shared::{AccountUnits, DateTimeValue, DecimalNumber, InstrumentName, PriceValue};
use serde::Deserialize;

/// One level of a price's bid or ask ladder.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceBucket {
    pub price: PriceValue,
    /// Liquidity available at this level, in units of the base currency.
    pub liquidity: Option<u64>,
}

/// Quote-to-home-currency conversion factors for a price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteHomeConversionFactors {
    pub positive_units: Option<DecimalNumber>,
    pub negative_units: Option<DecimalNumber>,
}

/// The units available for trading at a price, by position effect.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitsAvailableDetails {
    pub long: Option<DecimalNumber>,
    pub short: Option<DecimalNumber>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitsAvailable {
    pub default: Option<UnitsAvailableDetails>,
    pub reduce_first: Option<UnitsAvailableDetails>,
    pub reduce_only: Option<UnitsAvailableDetails>,
    pub open_only: Option<UnitsAvailableDetails>,
}

/// A client-facing price snapshot for an instrument.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPrice {
    pub instrument: Option<InstrumentName>,
    pub time: Option<DateTimeValue>,
    /// Whether the instrument is currently tradeable.
    pub tradeable: Option<bool>,
    pub bids: Option<Vec<PriceBucket>>,
    pub asks: Option<Vec<PriceBucket>>,
    pub closeout_bid: Option<PriceValue>,
    pub closeout_ask: Option<PriceValue>,
    pub quote_home_conversion_factors: Option<QuoteHomeConversionFactors>,
    pub units_available: Option<UnitsAvailable>,
}

/// The OHLC values of one candlestick.
#[derive(Debug, Clone, Deserialize)]
pub struct CandlestickData {
    pub o: PriceValue,
    pub h: PriceValue,
    pub l: PriceValue,
    pub c: PriceValue,
}

/// One candlestick of an instrument's price history.
#[derive(Debug, Clone, Deserialize)]
pub struct Candlestick {
    pub time: DateTimeValue,
    /// Bid candle; present only when requested.
    pub bid: Option<CandlestickData>,
    /// Ask candle; present only when requested.
    pub ask: Option<CandlestickData>,
    /// Midpoint candle; present only when requested.
    pub mid: Option<CandlestickData>,
    pub volume: Option<u64>,
    /// False for the still-forming candle at the end of a series.
    pub complete: Option<bool>,
}

/// A home-currency conversion entry, keyed by currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeConversions {
    pub currency: Option<String>,
    pub account_gain: Option<DecimalNumber>,
    pub account_loss: Option<DecimalNumber>,
    pub position_value: Option<AccountUnits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_price_decodes_ladders() {
        let json = r#"{
            "instrument": "EUR_USD",
            "time": "2018-09-20T21:38:23.055Z",
            "tradeable": true,
            "bids": [{"price": "1.14500", "liquidity": 1000000}],
            "asks": [{"price": "1.14513", "liquidity": 1000000}],
            "closeoutBid": "1.14490",
            "closeoutAsk": "1.14523"
        }"#;

        let price: ClientPrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.tradeable, Some(true));
        assert_eq!(price.bids.unwrap()[0].price.as_str(), "1.14500");
        assert!(price.units_available.is_none());
    }

    #[test]
    fn test_candlestick_carries_only_requested_components() {
        let json = r#"{
            "time": "2018-09-20T21:00:00.000000000Z",
            "mid": {"o": "1.14500", "h": "1.14570", "l": "1.14480", "c": "1.14530"},
            "volume": 1329,
            "complete": true
        }"#;

        let candle: Candlestick = serde_json::from_str(json).unwrap();
        assert!(candle.mid.is_some());
        assert!(candle.bid.is_none() && candle.ask.is_none());
        assert_eq!(candle.complete, Some(true));
    }
}
