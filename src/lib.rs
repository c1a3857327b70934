//! Thin facade over the Binance USDⓈ-M Futures REST trading API: validate
//! order parameters up front, forward to the exchange, return typed results.

pub mod config;
pub mod error;
pub mod exchange;
pub mod facade;
pub mod stop_limit;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::TradeError;
pub use exchange::{BinanceFuturesClient, ExchangeError, FuturesApi};
pub use facade::TradingFacade;
pub use stop_limit::StopLimitPlacer;
pub use types::{OrderType, Side, TimeInForce};
