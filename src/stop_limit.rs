// src/stop_limit.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::TradeError;
use crate::exchange::NewOrder;
use crate::facade::TradingFacade;
use crate::types::{OrderType, Side, StopLimitReceipt, TimeInForce};

/// Places stop-limit orders: orders that rest until the stop price trades,
/// then become a limit order at the limit price or better. Reuses the
/// facade's validation and client handle; holds no other state.
pub struct StopLimitPlacer {
    facade: Arc<TradingFacade>,
}

impl StopLimitPlacer {
    pub fn new(facade: Arc<TradingFacade>) -> Self {
        Self { facade }
    }

    /// Fraction used to offset the limit price from the trigger when the
    /// caller does not supply one (0.1%).
    fn default_limit_offset() -> Decimal {
        Decimal::new(1, 3)
    }

    pub async fn place_stop_limit_order(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_in_force: Option<TimeInForce>,
    ) -> Result<StopLimitReceipt, TradeError> {
        let time_in_force = time_in_force.unwrap_or(TimeInForce::Gtc);

        self.facade
            .validate_order_params(symbol, side, OrderType::Stop, quantity, Some(stop_price))?;

        if limit_price <= Decimal::ZERO {
            return Err(TradeError::InvalidParameter(
                "limit price must be positive".to_string(),
            ));
        }

        // Advisory only: an inverted limit/stop pair is unusual but the
        // exchange accepts it, so it never blocks submission.
        if side == Side::Sell && limit_price > stop_price {
            warn!(%limit_price, %stop_price, "for SELL the limit price is usually at or below the stop price");
        }
        if side == Side::Buy && limit_price < stop_price {
            warn!(%limit_price, %stop_price, "for BUY the limit price is usually at or above the stop price");
        }

        info!(%symbol, %side, %quantity, %stop_price, %limit_price, %time_in_force, "placing stop-limit order");

        let order = NewOrder {
            symbol: symbol.to_string(),
            side,
            order_type: OrderType::Stop,
            quantity,
            price: Some(limit_price),
            stop_price: Some(stop_price),
            time_in_force: Some(time_in_force),
        };

        let placed = self.facade.api().create_order(&order).await?;
        info!(order_id = placed.order_id, status = %placed.status, "stop-limit order placed");

        let timestamp = placed
            .update_time
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_else(Utc::now);

        Ok(StopLimitReceipt {
            order_id: placed.order_id,
            symbol: placed.symbol,
            side: placed.side,
            order_type: placed.order_type,
            quantity: placed.orig_qty,
            stop_price: placed.stop_price,
            limit_price: placed.price,
            executed_qty: placed.executed_qty,
            status: placed.status,
            time_in_force: placed.time_in_force,
            timestamp,
            client_order_id: placed.client_order_id,
        })
    }

    /// Protective close of a long: SELL once the stop trades, with the
    /// limit set slightly below the trigger so the order stays marketable.
    pub async fn place_stop_loss(
        &self,
        symbol: &str,
        quantity: Decimal,
        stop_price: Decimal,
        limit_offset: Option<Decimal>,
    ) -> Result<StopLimitReceipt, TradeError> {
        let offset = limit_offset.unwrap_or_else(Self::default_limit_offset);
        let limit_price = stop_price * (Decimal::ONE - offset);

        info!(%symbol, %quantity, %stop_price, %limit_price, "placing stop loss");
        self.place_stop_limit_order(symbol, Side::Sell, quantity, stop_price, limit_price, None)
            .await
    }

    /// Exit at a profit target. The side is explicit: SELL closes a long,
    /// BUY closes a short.
    pub async fn place_take_profit(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
        target_price: Decimal,
        limit_offset: Option<Decimal>,
    ) -> Result<StopLimitReceipt, TradeError> {
        let offset = limit_offset.unwrap_or_else(Self::default_limit_offset);
        let limit_price = target_price * (Decimal::ONE + offset);

        info!(%symbol, %side, %quantity, %target_price, %limit_price, "placing take profit");
        self.place_stop_limit_order(symbol, side, quantity, target_price, limit_price, None)
            .await
    }
}
