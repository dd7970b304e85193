//! User-adjustable swap settings and per-run requests.
//!
//! The bot mutates settings between runs; each run works from the snapshot it
//! loaded when it started, so a reconfiguration never changes a run midway.

use alloy::primitives::{Address, U256};
use arc_swap::ArcSwap;
use serde::Serialize;
use std::sync::Arc;

use crate::blockchain::types::{parse_amount, to_tokens, AmountError, GasPrice};
use crate::config::SwapDefaults;
use crate::swap::language::Language;

/// Current swap settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapSettings {
    pub target_token: Address,
    pub gas_price: GasPrice,
    /// Swap amount in base units.
    pub amount: U256,
    pub language: Language,
}

impl SwapSettings {
    pub fn from_defaults(defaults: &SwapDefaults) -> Result<Self, AmountError> {
        Ok(Self {
            target_token: defaults.target_token,
            gas_price: GasPrice::from_gwei(defaults.gas_price_gwei),
            amount: parse_amount(&defaults.amount)?,
            language: defaults
                .language
                .as_deref()
                .map(Language::from_locale)
                .unwrap_or_default(),
        })
    }

    /// Amount in whole native units.
    pub fn amount_tokens(&self) -> String {
        to_tokens(self.amount)
    }

    /// Freeze these settings into a request for one run.
    pub fn to_request(&self) -> SwapRequest {
        SwapRequest {
            amount_in: self.amount,
            target_token: self.target_token,
            gas_price: self.gas_price,
            language: self.language,
        }
    }
}

/// Inputs of a single orchestration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Amount approved and swapped, in base units.
    pub amount_in: U256,
    pub target_token: Address,
    pub gas_price: GasPrice,
    pub language: Language,
}

/// Single current snapshot of [`SwapSettings`].
///
/// Readers take an `Arc` snapshot without locking; updates are
/// read-copy-update so concurrent edits never lose each other.
#[derive(Debug)]
pub struct SettingsStore {
    current: ArcSwap<SwapSettings>,
}

impl SettingsStore {
    pub fn new(settings: SwapSettings) -> Self {
        Self {
            current: ArcSwap::from_pointee(settings),
        }
    }

    pub fn snapshot(&self) -> Arc<SwapSettings> {
        self.current.load_full()
    }

    /// Apply `change` to the current settings and publish the result.
    pub fn update<F>(&self, change: F) -> Arc<SwapSettings>
    where
        F: Fn(&mut SwapSettings),
    {
        let mut published = None;
        self.current.rcu(|current| {
            let mut next = SwapSettings::clone(current);
            change(&mut next);
            let next = Arc::new(next);
            published = Some(next.clone());
            next
        });
        published.unwrap_or_else(|| self.current.load_full())
    }

    pub fn set_target_token(&self, target_token: Address) -> Arc<SwapSettings> {
        let updated = self.update(|s| s.target_token = target_token);
        tracing::info!(target_token = %target_token, "Target token updated");
        updated
    }

    pub fn set_gas_price(&self, gas_price: GasPrice) -> Arc<SwapSettings> {
        let updated = self.update(|s| s.gas_price = gas_price);
        tracing::info!(gas_price_gwei = gas_price.gwei(), "Gas price updated");
        updated
    }

    pub fn set_amount(&self, amount: U256) -> Arc<SwapSettings> {
        let updated = self.update(|s| s.amount = amount);
        tracing::info!(amount = %to_tokens(amount), "Amount updated");
        updated
    }
}
