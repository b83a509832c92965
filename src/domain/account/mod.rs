//! Account domain: account state, properties, and tradeable instruments.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::{Account, AccountProperties, AccountSummary, Instrument};

use serde::{Deserialize, Serialize};

/// Financing mode of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountFinancingMode {
    NoFinancing,
    SecondBySecond,
    Daily,
}

/// Guaranteed stop loss support level for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuaranteedStopLossOrderMode {
    Disabled,
    Allowed,
    Required,
}

/// The type of a tradeable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    Currency,
    Cfd,
    Metal,
}
