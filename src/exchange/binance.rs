// src/exchange/binance.rs
use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::Sha256;
use tracing::debug;

use super::error::ExchangeError;
use super::messages::{
    AccountRecord, ExchangeInfoRecord, NewOrder, OrderRecord, SymbolRecord, TickerRecord,
};
use super::traits::FuturesApi;

type HmacSha256 = Hmac<Sha256>;

const MAINNET_URL: &str = "https://fapi.binance.com";
const TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Signed REST client for Binance USDⓈ-M Futures. Private endpoints carry
/// an HMAC-SHA256 signature over the timestamped, urlencoded query plus the
/// `X-MBX-APIKEY` header.
pub struct BinanceFuturesClient {
    api_key: String,
    secret_key: String,
    http_client: Client,
    base_url: String,
}

impl BinanceFuturesClient {
    pub fn new(api_key: String, secret_key: String, testnet: bool) -> Self {
        let base_url = if testnet { TESTNET_URL } else { MAINNET_URL };
        Self {
            api_key,
            secret_key,
            http_client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    fn sign(&self, query: &str) -> Result<String, ExchangeError> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|_| ExchangeError::Signing("invalid secret key length".to_string()))?;
        mac.update(query.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn build_signed_query(&self, mut params: Vec<(&str, String)>) -> Result<String, ExchangeError> {
        params.push(("timestamp", Utc::now().timestamp_millis().to_string()));

        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| ExchangeError::Signing(e.to_string()))?;
        let signature = self.sign(&query)?;

        Ok(format!("{}&signature={}", query, signature))
    }

    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: Vec<(&str, String)>,
    ) -> Result<T, ExchangeError> {
        let query = self.build_signed_query(params)?;
        let url = format!("{}{}?{}", self.base_url, endpoint, query);

        debug!(%endpoint, "sending signed request");
        let response = self
            .http_client
            .request(method, &url)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn send_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ExchangeError> {
        let mut url = format!("{}{}", self.base_url, endpoint);
        if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)
                .map_err(|e| ExchangeError::Signing(e.to_string()))?;
            url.push('?');
            url.push_str(&query);
        }

        let response = self.http_client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ExchangeError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::rejection(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Binance error bodies look like `{"code": -2011, "msg": "..."}`.
    fn rejection(status: StatusCode, body: &str) -> ExchangeError {
        #[derive(Deserialize)]
        struct ApiErrorBody {
            code: i64,
            msg: String,
        }

        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => ExchangeError::Api {
                code: parsed.code,
                message: parsed.msg,
            },
            Err(_) => ExchangeError::Unexpected {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            },
        }
    }

    fn order_params(order: &NewOrder) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", order.symbol.to_uppercase()),
            ("side", order.side.as_str().to_string()),
            ("type", order.order_type.as_str().to_string()),
            ("quantity", order.quantity.to_string()),
        ];

        if let Some(price) = order.price {
            params.push(("price", price.to_string()));
        }
        if let Some(stop_price) = order.stop_price {
            params.push(("stopPrice", stop_price.to_string()));
        }
        if let Some(tif) = order.time_in_force {
            params.push(("timeInForce", tif.as_str().to_string()));
        }

        params
    }
}

#[async_trait]
impl FuturesApi for BinanceFuturesClient {
    async fn ping(&self) -> Result<(), ExchangeError> {
        let url = format!("{}/fapi/v1/ping", self.base_url);
        self.http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn account(&self) -> Result<AccountRecord, ExchangeError> {
        self.send_signed(Method::GET, "/fapi/v2/account", vec![])
            .await
    }

    async fn get_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderRecord, ExchangeError> {
        let params = vec![
            ("symbol", symbol.to_uppercase()),
            ("orderId", order_id.to_string()),
        ];
        self.send_signed(Method::GET, "/fapi/v1/order", params).await
    }

    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<OrderRecord, ExchangeError> {
        let params = vec![
            ("symbol", symbol.to_uppercase()),
            ("orderId", order_id.to_string()),
        ];
        self.send_signed(Method::DELETE, "/fapi/v1/order", params)
            .await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderRecord, ExchangeError> {
        let params = Self::order_params(order);
        self.send_signed(Method::POST, "/fapi/v1/order", params)
            .await
    }

    async fn exchange_info(&self) -> Result<Vec<SymbolRecord>, ExchangeError> {
        let info: ExchangeInfoRecord = self.send_public("/fapi/v1/exchangeInfo", &[]).await?;
        Ok(info.symbols)
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerRecord, ExchangeError> {
        let params = [("symbol", symbol.to_uppercase())];
        self.send_public("/fapi/v1/ticker/price", &params).await
    }
}
