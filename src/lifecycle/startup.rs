//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Load the signer and check it against the configured address
//! - Connect to the node and verify the chain ID
//! - Seed the settings store from configured defaults
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Secrets never appear in log fields

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

use crate::blockchain::gateway::{ChainGateway, RpcGateway};
use crate::blockchain::types::{AmountError, ChainError};
use crate::blockchain::wallet::Wallet;
use crate::config::{AppConfig, ConfigError};
use crate::observability::metrics;
use crate::swap::{SettingsStore, SwapOrchestrator, SwapSettings};

/// Orchestrator over the live gateway, shared between handlers.
pub type SharedOrchestrator = Arc<SwapOrchestrator<dyn ChainGateway>>;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain setup failed: {0}")]
    Chain(#[from] ChainError),

    #[error("Invalid default swap amount: {0}")]
    Settings(#[from] AmountError),
}

/// Everything the front ends need once startup succeeded.
pub struct AppContext {
    pub config: AppConfig,
    pub orchestrator: SharedOrchestrator,
    pub settings: Arc<SettingsStore>,
}

/// Initialize subsystems in dependency order.
pub async fn start(config: AppConfig) -> Result<AppContext, StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let wallet = Wallet::from_identity(
        &config.secrets.private_key,
        config.secrets.user_address,
        config.chain.chain_id,
    )?;

    let gateway = RpcGateway::connect(&config.chain, wallet).await?;
    let gateway: Arc<dyn ChainGateway> = Arc::new(gateway);

    let settings = SwapSettings::from_defaults(&config.swap)?;
    tracing::info!(
        target_token = %settings.target_token,
        gas_price_gwei = settings.gas_price.gwei(),
        amount = %settings.amount_tokens(),
        language = ?settings.language,
        "Swap settings initialized"
    );

    Ok(AppContext {
        orchestrator: Arc::new(SwapOrchestrator::new(gateway)),
        settings: Arc::new(SettingsStore::new(settings)),
        config,
    })
}
