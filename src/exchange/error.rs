// src/exchange/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Rejection decoded from the exchange's error body
    /// (`{"code": -2011, "msg": "Unknown order sent."}`).
    #[error("Binance API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Non-success status whose body was not a Binance error payload.
    #[error("unexpected response (status {status}): {body}")]
    Unexpected { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request signing failed: {0}")]
    Signing(String),
}
