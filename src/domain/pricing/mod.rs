//! Pricing domain: current prices and historical candlesticks.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::{Candlestick, CandlestickData, ClientPrice, PriceBucket};

use crate::shared::ToWire;
use serde::{Deserialize, Serialize};

/// The granularity of a candlestick series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandlestickGranularity {
    S5,
    S10,
    S15,
    S30,
    M1,
    M2,
    M4,
    M5,
    M10,
    M15,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D,
    W,
    #[default]
    M,
}

impl CandlestickGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S5 => "S5",
            Self::S10 => "S10",
            Self::S15 => "S15",
            Self::S30 => "S30",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M4 => "M4",
            Self::M5 => "M5",
            Self::M10 => "M10",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H6 => "H6",
            Self::H8 => "H8",
            Self::H12 => "H12",
            Self::D => "D",
            Self::W => "W",
            Self::M => "M",
        }
    }
}

impl ToWire for CandlestickGranularity {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// The day of the week used to align weekly candlesticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeeklyAlignment {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    #[default]
    Friday,
    Saturday,
    Sunday,
}

impl ToWire for WeeklyAlignment {
    fn to_wire(&self) -> String {
        format!("{:?}", self)
    }
}

/// Which price components to include in a candlestick series.
///
/// Combinations are allowed: `"BA"` requests both bid and ask candles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingComponent {
    pub bid: bool,
    pub ask: bool,
    pub mid: bool,
}

impl PricingComponent {
    pub const MID: Self = Self {
        bid: false,
        ask: false,
        mid: true,
    };

    pub const BID_ASK: Self = Self {
        bid: true,
        ask: true,
        mid: false,
    };
}

impl ToWire for PricingComponent {
    fn to_wire(&self) -> String {
        let mut s = String::new();
        if self.bid {
            s.push('B');
        }
        if self.ask {
            s.push('A');
        }
        if self.mid {
            s.push('M');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_wire_names() {
        assert_eq!(CandlestickGranularity::S5.to_wire(), "S5");
        assert_eq!(CandlestickGranularity::H12.to_wire(), "H12");
        assert_eq!(CandlestickGranularity::default().to_wire(), "M");
    }

    #[test]
    fn test_pricing_component_combines_flags() {
        assert_eq!(PricingComponent::MID.to_wire(), "M");
        assert_eq!(PricingComponent::BID_ASK.to_wire(), "BA");
    }
}
