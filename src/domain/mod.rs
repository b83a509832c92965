//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain enums and body payload types
//! - `wire.rs` — serde response models matching the backend's documents
//! - `requests.rs` — request models with their `Endpoint` field tables
//! - `client.rs` — sub-client with the domain's operations

pub mod account;
pub mod order;
pub mod position;
pub mod pricing;
pub mod trade;
pub mod transaction;
