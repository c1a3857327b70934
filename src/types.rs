// src/types.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TradeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(TradeError::InvalidParameter(format!(
                "side must be BUY or SELL, got '{}'",
                other
            ))),
        }
    }
}

/// Order types accepted by Binance Futures. STOP is the stop-limit type:
/// it rests until the stop price trades, then becomes a limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
    Stop,
    StopMarket,
    TakeProfit,
    TakeProfitMarket,
    TrailingStopMarket,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::Stop => "STOP",
            OrderType::StopMarket => "STOP_MARKET",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            OrderType::TrailingStopMarket => "TRAILING_STOP_MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            "STOP" => Ok(OrderType::Stop),
            "STOP_MARKET" => Ok(OrderType::StopMarket),
            "TAKE_PROFIT" => Ok(OrderType::TakeProfit),
            "TAKE_PROFIT_MARKET" => Ok(OrderType::TakeProfitMarket),
            "TRAILING_STOP_MARKET" => Ok(OrderType::TrailingStopMarket),
            other => Err(TradeError::InvalidParameter(format!(
                "unknown order type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled.
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeInForce {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            other => Err(TradeError::InvalidParameter(format!(
                "time_in_force must be GTC, IOC or FOK, got '{}'",
                other
            ))),
        }
    }
}

// --- Typed results returned by the facade ---

#[derive(Debug, Clone, Serialize)]
pub struct OrderStatus {
    pub order_id: u64,
    pub symbol: String,
    pub status: String,
    pub side: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub executed_qty: Decimal,
    pub price: Decimal,
    pub avg_price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelReceipt {
    pub order_id: u64,
    pub symbol: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub total_balance: Decimal,
    pub available_balance: Decimal,
    pub total_unrealized_profit: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Decimal,
}

/// Acknowledgement for a placed stop-limit order. `timestamp` is the
/// exchange's `updateTime` (ms epoch) converted to UTC.
#[derive(Debug, Clone, Serialize)]
pub struct StopLimitReceipt {
    pub order_id: u64,
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub stop_price: Decimal,
    pub limit_price: Decimal,
    pub executed_qty: Decimal,
    pub status: String,
    pub time_in_force: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub client_order_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!(Side::from_str("buy").unwrap(), Side::Buy);
        assert_eq!(Side::from_str("SELL").unwrap(), Side::Sell);
        assert_eq!(Side::from_str(" Sell ").unwrap(), Side::Sell);
        assert!(Side::from_str("HOLD").is_err());
    }

    #[test]
    fn order_type_parses_case_insensitively() {
        assert_eq!(OrderType::from_str("limit").unwrap(), OrderType::Limit);
        assert_eq!(OrderType::from_str("Stop").unwrap(), OrderType::Stop);
        assert_eq!(
            OrderType::from_str("stop_market").unwrap(),
            OrderType::StopMarket
        );
        assert!(OrderType::from_str("ICEBERG").is_err());
    }

    #[test]
    fn time_in_force_parses_case_insensitively() {
        assert_eq!(TimeInForce::from_str("gtc").unwrap(), TimeInForce::Gtc);
        assert_eq!(TimeInForce::from_str("IOC").unwrap(), TimeInForce::Ioc);
        assert_eq!(TimeInForce::from_str("Fok").unwrap(), TimeInForce::Fok);

        let err = TimeInForce::from_str("DAY").unwrap_err();
        assert!(matches!(err, TradeError::InvalidParameter(_)));
    }

    #[test]
    fn wire_names_round_trip() {
        assert_eq!(Side::from_str(Side::Buy.as_str()).unwrap(), Side::Buy);
        assert_eq!(
            OrderType::from_str(OrderType::TrailingStopMarket.as_str()).unwrap(),
            OrderType::TrailingStopMarket
        );
        assert_eq!(
            TimeInForce::from_str(TimeInForce::Fok.as_str()).unwrap(),
            TimeInForce::Fok
        );
    }
}
