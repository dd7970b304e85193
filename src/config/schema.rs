//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bot.
//! All types derive Serde traits for deserialization from config files.
//! Secrets are never read from or written to files; they come from the
//! process environment only (see [`crate::config::loader`]).

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Root configuration for the swap bot.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Chain identity and RPC settings.
    pub chain: ChainConfig,

    /// Initial swap settings, mutable at runtime through the bot.
    pub swap: SwapDefaults,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Signer credentials and bot token (environment only).
    #[serde(skip)]
    pub secrets: Secrets,
}

/// Chain configuration for the RPC gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID used for EIP-155 signing and connection verification.
    pub chain_id: u64,

    /// Uniswap-V2 style router used for wrapping lookups and swaps.
    pub router_address: Address,

    /// Block explorer base URL, used for transaction links.
    pub explorer_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for a transaction receipt, in seconds.
    pub receipt_timeout_secs: u64,

    /// Interval between receipt polls, in milliseconds.
    pub receipt_poll_interval_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://assam-rpc.tea.xyz".to_string(),
            chain_id: 93384,
            router_address: address!("ACBc89FF219232C058428D166860df4eA0114999"),
            explorer_url: "https://assam.tea.xyz".to_string(),
            rpc_timeout_secs: 10,
            receipt_timeout_secs: 120,
            receipt_poll_interval_ms: 2000,
        }
    }
}

/// Startup values for the user-adjustable swap settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwapDefaults {
    /// Token received by the swap.
    pub target_token: Address,

    /// Static gas price in gwei.
    pub gas_price_gwei: u64,

    /// Swap amount in whole native units (e.g. "1.5").
    pub amount: String,

    /// Locale hint for outcome messages ("id_ID" selects Indonesian).
    /// When unset, `LANG` is consulted; English otherwise.
    pub language: Option<String>,
}

impl Default for SwapDefaults {
    fn default() -> Self {
        Self {
            target_token: address!("C4341CB2C976306AE9169efb3d8301ea287a3128"),
            gas_price_gwei: 1000,
            amount: "1.0".to_string(),
            language: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Secrets loaded from the environment.
#[derive(Clone, Default)]
pub struct Secrets {
    /// Telegram bot token. Only the bot binary requires it.
    pub telegram_bot_token: Option<String>,

    /// Hex-encoded signer private key.
    pub private_key: String,

    /// Public address the private key is expected to control.
    pub user_address: Address,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field(
                "telegram_bot_token",
                &self.telegram_bot_token.as_ref().map(|_| "<redacted>"),
            )
            .field("private_key", &"<redacted>")
            .field("user_address", &self.user_address)
            .finish()
    }
}
