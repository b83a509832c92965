//! Pricing endpoint request models and their field tables.

use crate::domain::pricing::wire::{Candlestick, ClientPrice, HomeConversions};
use crate::domain::pricing::{CandlestickGranularity, PricingComponent, WeeklyAlignment};
use crate::endpoint::{field, Endpoint, FieldSpec, Method};
use crate::shared::{AcceptDatetimeFormat, AccountId, DateTimeValue, InstrumentName};
use serde::Deserialize;

/// Get current prices for a list of instruments.
#[derive(Debug, Clone, Default)]
pub struct GetPricingRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub account_id: Option<AccountId>,
    /// Instruments to price; at least one is required.
    pub instruments: Option<Vec<InstrumentName>>,
    /// Only return prices newer than this time.
    pub since: Option<DateTimeValue>,
    pub include_units_available: Option<bool>,
    pub include_home_conversions: Option<bool>,
}

impl Endpoint for GetPricingRequest {
    type Response = GetPricingResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/accounts/{accountID}/pricing";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
        FieldSpec::query("instruments", |r: &Self| field::list(&r.instruments)).required(),
        FieldSpec::query("since", |r: &Self| field::text(&r.since)),
        FieldSpec::query("includeUnitsAvailable", |r: &Self| {
            field::flag(&r.include_units_available)
        }),
        FieldSpec::query("includeHomeConversions", |r: &Self| {
            field::flag(&r.include_home_conversions)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPricingResponse {
    pub prices: Vec<ClientPrice>,
    pub home_conversions: Option<Vec<HomeConversions>>,
    pub time: Option<DateTimeValue>,
}

/// Fetch historical candlesticks for an instrument.
#[derive(Debug, Clone, Default)]
pub struct GetCandlesRequest {
    pub accept_datetime_format: Option<AcceptDatetimeFormat>,
    pub instrument: Option<InstrumentName>,
    /// Price components to include [default=M].
    pub price: Option<PricingComponent>,
    /// Candlestick granularity [default=S5].
    pub granularity: Option<CandlestickGranularity>,
    /// Number of candles to return [default=500, maximum=5000].
    pub count: Option<u32>,
    pub from: Option<DateTimeValue>,
    pub to: Option<DateTimeValue>,
    /// Use the previous candle's close as this candle's open.
    pub smooth: Option<bool>,
    /// Whether the candle covering `from` itself is included.
    pub include_first: Option<bool>,
    /// Hour of day (0-23) used to align daily candles.
    pub daily_alignment: Option<u32>,
    /// Timezone for `daily_alignment` (e.g. `"America/New_York"`).
    pub alignment_timezone: Option<String>,
    pub weekly_alignment: Option<WeeklyAlignment>,
}

impl Endpoint for GetCandlesRequest {
    type Response = GetCandlesResponse;
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/v3/instruments/{instrument}/candles";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::header("Accept-Datetime-Format", |r: &Self| {
            field::text(&r.accept_datetime_format)
        }),
        FieldSpec::url_segment("instrument", |r: &Self| field::text(&r.instrument)).required(),
        FieldSpec::query("price", |r: &Self| field::text(&r.price)),
        FieldSpec::query("granularity", |r: &Self| field::text(&r.granularity)),
        FieldSpec::query("count", |r: &Self| field::count(&r.count)).clamped(5000),
        FieldSpec::query("from", |r: &Self| field::text(&r.from)),
        FieldSpec::query("to", |r: &Self| field::text(&r.to)),
        FieldSpec::query("smooth", |r: &Self| field::flag(&r.smooth)),
        FieldSpec::query("includeFirst", |r: &Self| field::flag(&r.include_first)),
        FieldSpec::query("dailyAlignment", |r: &Self| {
            field::count(&r.daily_alignment)
        }),
        FieldSpec::query("alignmentTimezone", |r: &Self| {
            field::text(&r.alignment_timezone)
        }),
        FieldSpec::query("weeklyAlignment", |r: &Self| {
            field::text(&r.weekly_alignment)
        }),
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCandlesResponse {
    pub instrument: Option<InstrumentName>,
    pub granularity: Option<CandlestickGranularity>,
    pub candles: Vec<Candlestick>,
}
