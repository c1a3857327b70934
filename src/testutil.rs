// src/testutil.rs
//! Scriptable stand-in for the exchange, used by the facade and stop-limit
//! tests. Success answers are canned; `fail_*` flags flip individual calls
//! into Binance-style rejections.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::exchange::{
    AccountRecord, ExchangeError, FuturesApi, NewOrder, OrderRecord, SymbolRecord, TickerRecord,
};

#[derive(Default)]
pub struct MockExchange {
    pub fail_ping: bool,
    pub fail_account: bool,
    pub fail_orders: bool,
    pub symbols: Vec<SymbolRecord>,
    pub ticker_price: Option<String>,
    pub last_order: Mutex<Option<NewOrder>>,
}

impl MockExchange {
    pub fn last_order(&self) -> Option<NewOrder> {
        self.last_order.lock().unwrap().clone()
    }
}

fn rejected(code: i64, message: &str) -> ExchangeError {
    ExchangeError::Api {
        code,
        message: message.to_string(),
    }
}

#[async_trait]
impl FuturesApi for MockExchange {
    async fn ping(&self) -> Result<(), ExchangeError> {
        if self.fail_ping {
            return Err(rejected(-1000, "ping failed"));
        }
        Ok(())
    }

    async fn account(&self) -> Result<AccountRecord, ExchangeError> {
        if self.fail_account {
            return Err(rejected(-2015, "Invalid API-key, IP, or permissions for action."));
        }
        Ok(AccountRecord {
            total_wallet_balance: Decimal::new(1000, 0),
            available_balance: Decimal::new(900, 0),
            total_unrealized_profit: Decimal::ZERO,
        })
    }

    async fn get_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderRecord, ExchangeError> {
        if self.fail_orders {
            return Err(rejected(-2013, "Order does not exist."));
        }
        Ok(OrderRecord {
            order_id,
            symbol: symbol.to_uppercase(),
            status: "FILLED".to_string(),
            side: "BUY".to_string(),
            order_type: "LIMIT".to_string(),
            orig_qty: Decimal::new(1, 3),
            executed_qty: Decimal::new(1, 3),
            price: Decimal::new(50_000, 0),
            avg_price: Decimal::new(49_999, 0),
            stop_price: Decimal::ZERO,
            time_in_force: Some("GTC".to_string()),
            update_time: Some(1_700_000_000_000),
            client_order_id: Some("x-mock-1".to_string()),
        })
    }

    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderRecord, ExchangeError> {
        if self.fail_orders {
            return Err(rejected(-2011, "Unknown order sent."));
        }
        let mut order = self.get_order(symbol, order_id).await?;
        order.status = "CANCELED".to_string();
        order.executed_qty = Decimal::ZERO;
        Ok(order)
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderRecord, ExchangeError> {
        if self.fail_orders {
            return Err(rejected(-2021, "Order would immediately trigger."));
        }

        *self.last_order.lock().unwrap() = Some(order.clone());

        Ok(OrderRecord {
            order_id: 42,
            symbol: order.symbol.to_uppercase(),
            status: "NEW".to_string(),
            side: order.side.as_str().to_string(),
            order_type: order.order_type.as_str().to_string(),
            orig_qty: order.quantity,
            executed_qty: Decimal::ZERO,
            price: order.price.unwrap_or_default(),
            avg_price: Decimal::ZERO,
            stop_price: order.stop_price.unwrap_or_default(),
            time_in_force: order.time_in_force.map(|t| t.as_str().to_string()),
            update_time: Some(1_700_000_000_000),
            client_order_id: Some("x-mock-1".to_string()),
        })
    }

    async fn exchange_info(&self) -> Result<Vec<SymbolRecord>, ExchangeError> {
        Ok(self.symbols.clone())
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerRecord, ExchangeError> {
        match &self.ticker_price {
            Some(price) => Ok(TickerRecord {
                symbol: symbol.to_uppercase(),
                price: price.clone(),
            }),
            None => Err(rejected(-1121, "Invalid symbol.")),
        }
    }
}
