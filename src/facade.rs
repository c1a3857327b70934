// src/facade.rs
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use crate::error::TradeError;
use crate::exchange::{BinanceFuturesClient, FuturesApi};
use crate::types::{
    AccountBalance, CancelReceipt, OrderStatus, OrderType, PriceQuote, Side, SymbolInfo,
};

/// Entry point for everything except stop-limit placement. Holds the
/// exchange client handle and nothing else; every call builds its request
/// and result independently.
pub struct TradingFacade {
    api: Arc<dyn FuturesApi>,
}

impl TradingFacade {
    /// Builds the facade and proves the credentials work: a reachability
    /// ping followed by an account fetch. Either failure propagates, so an
    /// unverified facade never exists.
    pub async fn connect(api: Arc<dyn FuturesApi>) -> Result<Self, TradeError> {
        api.ping().await.map_err(|e| {
            error!(error = %e, "connectivity probe failed");
            TradeError::from(e)
        })?;

        let account = api.account().await.map_err(|e| {
            error!(error = %e, "account fetch failed during connection check");
            TradeError::from(e)
        })?;

        info!(balance = %account.total_wallet_balance, "connection validated");
        Ok(Self { api })
    }

    /// Convenience wrapper: bind a Binance client to the selected endpoint
    /// and run the connection check in one step.
    pub async fn connect_binance(
        api_key: String,
        secret_key: String,
        testnet: bool,
    ) -> Result<Self, TradeError> {
        let client = BinanceFuturesClient::new(api_key, secret_key, testnet);
        Self::connect(Arc::new(client)).await
    }

    pub(crate) fn api(&self) -> &Arc<dyn FuturesApi> {
        &self.api
    }

    /// Pre-flight order validation. Pure, no network round-trip. Side and
    /// order type arrive already parsed; unmapped strings were rejected at
    /// the boundary by `FromStr`.
    pub fn validate_order_params(
        &self,
        symbol: &str,
        side: Side,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<(), TradeError> {
        if symbol.trim().is_empty() {
            return Err(TradeError::InvalidParameter(
                "symbol must not be empty".to_string(),
            ));
        }

        if quantity <= Decimal::ZERO {
            return Err(TradeError::InvalidParameter(
                "quantity must be positive".to_string(),
            ));
        }

        if order_type == OrderType::Limit {
            match price {
                Some(p) if p > Decimal::ZERO => {}
                _ => {
                    return Err(TradeError::InvalidParameter(
                        "price must be provided and positive for LIMIT orders".to_string(),
                    ))
                }
            }
        }

        debug!(%symbol, %side, %order_type, %quantity, "order parameters validated");
        Ok(())
    }

    pub async fn get_order_status(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderStatus, TradeError> {
        info!(%symbol, order_id, "fetching order status");
        let order = self.api.get_order(symbol, order_id).await?;
        info!(status = %order.status, "order status retrieved");

        Ok(OrderStatus {
            order_id: order.order_id,
            symbol: order.symbol,
            status: order.status,
            side: order.side,
            order_type: order.order_type,
            quantity: order.orig_qty,
            executed_qty: order.executed_qty,
            price: order.price,
            avg_price: order.avg_price,
        })
    }

    /// Requests cancellation. Idempotency is exchange-owned: cancelling an
    /// already-cancelled order surfaces whatever the exchange answers.
    pub async fn cancel_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<CancelReceipt, TradeError> {
        info!(%symbol, order_id, "cancelling order");
        let order = self.api.cancel_order(symbol, order_id).await.map_err(|e| {
            error!(order_id, error = %e, "cancel failed");
            TradeError::from(e)
        })?;

        info!(order_id, "order cancelled");
        Ok(CancelReceipt {
            order_id: order.order_id,
            symbol: order.symbol,
            status: order.status,
        })
    }

    pub async fn get_account_balance(&self) -> Result<AccountBalance, TradeError> {
        let account = self.api.account().await?;
        info!(balance = %account.total_wallet_balance, "balance retrieved");

        Ok(AccountBalance {
            total_balance: account.total_wallet_balance,
            available_balance: account.available_balance,
            total_unrealized_profit: account.total_unrealized_profit,
        })
    }

    /// Linear scan of the exchange's symbol directory, case-insensitive.
    /// No match is `SymbolNotFound`, a normal outcome distinct from a
    /// directory fetch failure.
    pub async fn get_symbol_info(&self, symbol: &str) -> Result<SymbolInfo, TradeError> {
        let directory = self.api.exchange_info().await?;
        let wanted = symbol.trim();

        directory
            .into_iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(wanted))
            .map(|s| SymbolInfo {
                symbol: s.symbol,
                status: s.status,
                base_asset: s.base_asset,
                quote_asset: s.quote_asset,
                price_precision: s.price_precision,
                quantity_precision: s.quantity_precision,
            })
            .ok_or(TradeError::SymbolNotFound)
    }

    pub async fn get_current_price(&self, symbol: &str) -> Result<PriceQuote, TradeError> {
        let ticker = self.api.ticker_price(symbol).await?;

        let price = Decimal::from_str(&ticker.price).map_err(|_| TradeError::Exchange {
            code: None,
            message: format!(
                "unparseable ticker price '{}' for {}",
                ticker.price, ticker.symbol
            ),
        })?;

        Ok(PriceQuote {
            symbol: ticker.symbol,
            price,
        })
    }
}
