//! HTTP transport for built wire requests, with per-verb retry policies.

pub mod client;
pub mod retry;

pub use client::OandaHttp;
pub use retry::{RetryConfig, RetryPolicy};
