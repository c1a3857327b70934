// src/exchange/traits.rs
use async_trait::async_trait;

use super::error::ExchangeError;
use super::messages::{AccountRecord, NewOrder, OrderRecord, SymbolRecord, TickerRecord};

/// The fixed call surface this crate consumes from Binance USDⓈ-M Futures.
/// Everything behind it (signing, transport, rate limits) is the client's
/// concern; the facade only sees these shapes.
#[async_trait]
pub trait FuturesApi: Send + Sync {
    /// No-arg reachability probe.
    async fn ping(&self) -> Result<(), ExchangeError>;

    /// Account snapshot: wallet balance, available balance, unrealized PnL.
    async fn account(&self) -> Result<AccountRecord, ExchangeError>;

    async fn get_order(&self, symbol: &str, order_id: u64)
        -> Result<OrderRecord, ExchangeError>;

    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderRecord, ExchangeError>;

    async fn create_order(&self, order: &NewOrder) -> Result<OrderRecord, ExchangeError>;

    /// Full symbol directory from exchangeInfo.
    async fn exchange_info(&self) -> Result<Vec<SymbolRecord>, ExchangeError>;

    async fn ticker_price(&self, symbol: &str) -> Result<TickerRecord, ExchangeError>;
}
