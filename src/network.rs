//! REST host constants for the OANDA v20 API.

/// fxTrade practice (demo) REST host.
pub const PRACTICE_API_URL: &str = "https://api-fxpractice.oanda.com";

/// fxTrade live REST host.
pub const LIVE_API_URL: &str = "https://api-fxtrade.oanda.com";
