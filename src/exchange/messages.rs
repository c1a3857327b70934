// src/exchange/messages.rs
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{OrderType, Side, TimeInForce};

/// Order creation request forwarded to the exchange.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

/// Order payload as Binance Futures returns it. Create, query and cancel
/// all answer with this shape; fields the endpoint omits default to zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: u64,
    pub symbol: String,
    pub status: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub orig_qty: Decimal,
    #[serde(default)]
    pub executed_qty: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub avg_price: Decimal,
    #[serde(default)]
    pub stop_price: Decimal,
    #[serde(default)]
    pub time_in_force: Option<String>,
    /// Millisecond epoch of the last update.
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(default)]
    pub client_order_id: Option<String>,
}

/// Relevant slice of GET /fapi/v2/account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub total_wallet_balance: Decimal,
    pub available_balance: Decimal,
    pub total_unrealized_profit: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeInfoRecord {
    pub symbols: Vec<SymbolRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
}

/// Binance reports the ticker price as a string; the facade parses it.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerRecord {
    pub symbol: String,
    pub price: String,
}
