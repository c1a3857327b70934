// src/exchange/mod.rs
pub mod binance;
pub mod error;
pub mod messages;
pub mod traits;

pub use binance::BinanceFuturesClient;
pub use error::ExchangeError;
pub use messages::{AccountRecord, NewOrder, OrderRecord, SymbolRecord, TickerRecord};
pub use traits::FuturesApi;
