//! Chain-specific types and error definitions.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export ChainConfig from config module to avoid duplication
pub use crate::config::schema::ChainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Endpoint unreachable or failed the liveness check.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Signing or broadcast failed.
    #[error("Transaction submission failed: {0}")]
    TransactionSubmission(String),

    /// No receipt within the configured window.
    #[error("Transaction {tx_hash} not mined after {secs} seconds")]
    TransactionTimeout { tx_hash: TxHash, secs: u64 },

    /// Receipt present but reports failure.
    #[error("Transaction {tx_hash} reverted")]
    TransactionReverted { tx_hash: TxHash },

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A contract call returned data that could not be decoded.
    #[error("Failed to decode {call} result: {reason}")]
    Decode { call: &'static str, reason: String },
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Static legacy gas price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPrice {
    gwei: u64,
}

impl GasPrice {
    const WEI_PER_GWEI: u128 = 1_000_000_000;

    pub fn from_gwei(gwei: u64) -> Self {
        Self { gwei }
    }

    pub fn gwei(&self) -> u64 {
        self.gwei
    }

    pub fn wei(&self) -> u128 {
        self.gwei as u128 * Self::WEI_PER_GWEI
    }
}

/// Router swap call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOrder {
    pub amount_in: U256,
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub recipient: Address,
    /// Unix timestamp after which the router rejects the swap.
    pub deadline: u64,
}

/// Summary of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    /// True when the receipt status flag is 1.
    pub success: bool,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// Errors parsing a user-supplied amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must not be negative")]
    Negative,

    #[error("amount must be greater than zero")]
    Zero,

    #[error("invalid amount: {0}")]
    Invalid(String),
}

/// Parse a decimal amount in whole native units into base units (18 decimals).
pub fn parse_amount(text: &str) -> Result<U256, AmountError> {
    let text = text.trim();
    // parse_ether silently takes the absolute value of negative input
    if text.starts_with('-') {
        return Err(AmountError::Negative);
    }
    let wei = parse_ether(text).map_err(|e| AmountError::Invalid(e.to_string()))?;
    if wei.is_zero() {
        return Err(AmountError::Zero);
    }
    Ok(wei)
}

/// Format base units as whole units, trimming trailing zeros ("5.0", "1.25").
pub fn to_tokens(wei: U256) -> String {
    let formatted = format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}
