// src/main.rs
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use futures_bot::config::AppConfig;
use futures_bot::TradingFacade;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = AppConfig::new()?;
    if config.testnet {
        info!("starting in TESTNET mode");
    } else {
        warn!("starting in LIVE mode - real funds at risk");
    }

    let facade = Arc::new(
        TradingFacade::connect_binance(
            config.api_key.clone(),
            config.secret_key.clone(),
            config.testnet,
        )
        .await?,
    );

    let balance = facade.get_account_balance().await?;
    println!(
        "Wallet balance: {} USDT (available: {}, unrealized PnL: {})",
        balance.total_balance, balance.available_balance, balance.total_unrealized_profit
    );

    let quote = facade.get_current_price(&config.symbol).await?;
    println!("{}: {}", quote.symbol, quote.price);

    match facade.get_symbol_info(&config.symbol).await {
        Ok(info) => println!(
            "{} [{}] {}/{} (price dp: {}, qty dp: {})",
            info.symbol,
            info.status,
            info.base_asset,
            info.quote_asset,
            info.price_precision,
            info.quantity_precision
        ),
        Err(e) => println!("Symbol info unavailable: {}", e),
    }

    Ok(())
}
