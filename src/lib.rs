//! # OANDA SDK
//!
//! A typed Rust client for the OANDA v20 REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Scalar wrapper types and shared newtypes
//! 2. **Marshalling** — `Endpoint` field tables: request building + response decoding
//! 3. **HTTP** — `OandaHttp` with per-verb retry policies
//! 4. **High-Level Client** — `OandaClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oanda_sdk::prelude::*;
//!
//! let client = OandaClient::builder()
//!     .practice()
//!     .token("your-api-token")
//!     .build()?;
//!
//! let summary = client.accounts().summary("001-001-1234567-001").await?;
//! let open = client.trades().list_open("001-001-1234567-001").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared scalar wrapper types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): enums, wire types, request catalogue.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API host constants.
pub mod network;

// ── Layer 2: Marshalling ─────────────────────────────────────────────────────

/// Endpoint metadata, request building, response decoding.
pub mod endpoint;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP executor with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OandaClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Scalar wrappers
    pub use crate::shared::{
        AcceptDatetimeFormat, AccountId, AccountUnits, ClientId, DateTimeValue, DecimalNumber,
        FromWire, InstrumentName, OrderId, OrderSpecifier, PriceValue, ToWire, TradeId,
        TradeSpecifier, TransactionId, Units,
    };

    // Marshalling core
    pub use crate::endpoint::{build, decode_response, Endpoint, Method, WireRequest};

    // Domain types — account
    pub use crate::domain::account::{Account, AccountProperties, AccountSummary, Instrument};

    // Domain types — order
    pub use crate::domain::order::{
        ClientExtensions, MarketOrderRequest, Order, OrderRequest, OrderState, OrderStateFilter,
        OrderType, StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
    };

    // Domain types — trade, position
    pub use crate::domain::position::{Position, PositionCloseUnits, PositionSide};
    pub use crate::domain::trade::{Trade, TradeCloseUnits, TradeState, TradeStateFilter};

    // Domain types — pricing
    pub use crate::domain::pricing::{
        Candlestick, CandlestickGranularity, ClientPrice, PriceBucket, PricingComponent,
    };

    // Domain types — transaction
    pub use crate::domain::transaction::Transaction;

    // Errors
    pub use crate::error::{ConversionError, RequestError, SdkError};

    // Network
    pub use crate::network::{LIVE_API_URL, PRACTICE_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, OandaClient, OandaClientBuilder, OrdersClient, PositionsClient,
        PricingClient, TradesClient, TransactionsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{OandaHttp, RetryConfig, RetryPolicy};
}
