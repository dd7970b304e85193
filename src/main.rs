//! Tea Assam swap bot.
//!
//! # Architecture Overview
//!
//! ```text
//!     Telegram chat
//!     ─────────────▶ bot (commands, menu, dialogue)
//!                        │            │
//!                        ▼            ▼
//!                 SettingsStore   SwapOrchestrator
//!                                    │
//!                                    ▼
//!                              ChainGateway ──▶ JSON-RPC node
//!                       (wallet, nonce, receipts)
//! ```

use anyhow::Context;
use teloxide::Bot;

use teaswap_bot::bot::{self, BotContext};
use teaswap_bot::config::load_config;
use teaswap_bot::lifecycle::startup;
use teaswap_bot::observability::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    init_logging(&config.observability).context("Failed to initialize logging")?;

    tracing::info!("teaswap-bot v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        chain_id = config.chain.chain_id,
        router = %config.chain.router_address,
        signer = %config.secrets.user_address,
        "Configuration loaded"
    );

    let token = config.secrets.require_bot_token()?.to_string();
    let app = startup::start(config).await?;

    let bot = Bot::new(token);
    bot::run(
        bot,
        BotContext {
            orchestrator: app.orchestrator,
            settings: app.settings,
            explorer_url: app.config.chain.explorer_url,
        },
    )
    .await;

    tracing::info!("Shutdown complete");
    Ok(())
}
