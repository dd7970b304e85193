//! Result record of a completed swap run.

use alloy::primitives::{TxHash, U256};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blockchain::types::{to_tokens, TxReceipt};
use crate::swap::language::Language;

/// Whether the swap transaction succeeded on-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Success,
    Failure,
}

impl SwapStatus {
    /// `Success` iff the receipt status flag is 1.
    pub fn from_receipt(receipt: &TxReceipt) -> Self {
        if receipt.success {
            SwapStatus::Success
        } else {
            SwapStatus::Failure
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwapStatus::Success => "success",
            SwapStatus::Failure => "failure",
        }
    }
}

/// Aggregated result of one run. Created per run and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SwapOutcome {
    pub run_id: Uuid,
    /// Native balance before wrapping, in base units.
    pub native_balance: U256,
    /// Wrapped-token balance after wrapping, in base units.
    pub wrapped_balance: U256,
    pub wrap_tx_hash: TxHash,
    pub approval_tx_hash: TxHash,
    pub swap_tx_hash: TxHash,
    pub swap_status: SwapStatus,
    pub message: String,
    pub language: Language,
}

impl SwapOutcome {
    pub fn native_balance_tokens(&self) -> String {
        to_tokens(self.native_balance)
    }

    pub fn wtea_balance_tokens(&self) -> String {
        to_tokens(self.wrapped_balance)
    }

    pub fn is_success(&self) -> bool {
        self.swap_status == SwapStatus::Success
    }

    pub fn status_label(&self) -> &'static str {
        self.language.status_label(self.swap_status)
    }
}
