//! Position domain: per-instrument aggregate positions.

#[cfg(feature = "http")]
pub mod client;
pub mod requests;
pub mod wire;

pub use wire::{Position, PositionSide};

use crate::shared::DecimalNumber;
use serde::{Serialize, Serializer};

/// How much of one side of a position to close.
///
/// Serializes as `"ALL"`, `"NONE"`, or the decimal's wire form.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionCloseUnits {
    All,
    None,
    Units(DecimalNumber),
}

impl Serialize for PositionCloseUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str("ALL"),
            Self::None => serializer.serialize_str("NONE"),
            Self::Units(units) => serializer.serialize_str(units.as_str()),
        }
    }
}
