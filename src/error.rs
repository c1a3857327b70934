// src/error.rs
use thiserror::Error;

use crate::exchange::ExchangeError;

/// Uniform failure kind returned by every facade operation. Pre-flight
/// validation and exchange-side failures share this one channel; callers
/// pattern match instead of catching.
#[derive(Debug, Error)]
pub enum TradeError {
    /// Caller-supplied parameters failed validation before any network call.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The exchange (or its transport) rejected the operation. `code` is
    /// Binance's numeric error code when the rejection carried one.
    #[error("exchange error: {message}")]
    Exchange {
        code: Option<i64>,
        message: String,
    },

    /// The requested symbol is not listed. A normal lookup outcome, not a
    /// fetch failure.
    #[error("Symbol not found")]
    SymbolNotFound,
}

impl From<ExchangeError> for TradeError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Api { code, message } => TradeError::Exchange {
                code: Some(code),
                message,
            },
            other => TradeError::Exchange {
                code: None,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_rejection_keeps_the_exchange_code() {
        let err = TradeError::from(ExchangeError::Api {
            code: -2011,
            message: "Unknown order sent.".to_string(),
        });
        match err {
            TradeError::Exchange { code, message } => {
                assert_eq!(code, Some(-2011));
                assert_eq!(message, "Unknown order sent.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn symbol_not_found_message_is_stable() {
        assert_eq!(TradeError::SymbolNotFound.to_string(), "Symbol not found");
    }
}
