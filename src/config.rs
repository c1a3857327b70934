// src/config.rs

use config::{Config, ConfigError, File};
use serde::Deserialize;

fn default_testnet() -> bool {
    // Default to the sandbox; live trading is opt-in.
    true
}

fn default_symbol() -> String {
    "BTCUSDT".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub secret_key: String,
    #[serde(default = "default_testnet")]
    pub testnet: bool,
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("Settings").required(false))
            .add_source(config::Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
