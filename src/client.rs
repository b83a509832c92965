//! High-level client — `OandaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::account::client::Accounts;
use crate::domain::order::client::Orders;
use crate::domain::position::client::Positions;
use crate::domain::pricing::client::Pricing;
use crate::domain::trade::client::Trades;
use crate::domain::transaction::client::Transactions;
use crate::error::SdkError;
use crate::http::OandaHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::pricing::client::Pricing as PricingClient;
pub use crate::domain::trade::client::Trades as TradesClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.accounts()`, `client.orders()`, etc.
pub struct OandaClient {
    pub(crate) http: OandaHttp,
}

impl OandaClient {
    pub fn builder() -> OandaClientBuilder {
        OandaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn pricing(&self) -> Pricing<'_> {
        Pricing { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    /// Replace the bearer token used for authentication.
    pub async fn set_token(&self, token: Option<String>) {
        self.http.set_auth_token(token).await;
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl Clone for OandaClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OandaClientBuilder {
    base_url: String,
    token: Option<String>,
}

impl Default for OandaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::PRACTICE_API_URL.to_string(),
            token: None,
        }
    }
}

impl OandaClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Target the practice (demo) environment. This is the default.
    pub fn practice(mut self) -> Self {
        self.base_url = crate::network::PRACTICE_API_URL.to_string();
        self
    }

    /// Target the live trading environment.
    pub fn live(mut self) -> Self {
        self.base_url = crate::network::LIVE_API_URL.to_string();
        self
    }

    /// Pre-set the bearer token on construction.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<OandaClient, SdkError> {
        Ok(OandaClient {
            http: OandaHttp::new(&self.base_url, self.token),
        })
    }
}
