//! Outcome message language.

use serde::{Deserialize, Serialize};

use crate::swap::outcome::SwapStatus;

/// Language used for user-facing outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

impl Language {
    /// Resolve a locale name such as `id_ID.UTF-8` or `en_US`.
    ///
    /// Any name containing `id` (case-insensitive) selects Indonesian.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_lowercase().contains("id") {
            Language::Indonesian
        } else {
            Language::English
        }
    }

    pub fn swap_message(self, status: SwapStatus) -> &'static str {
        match (self, status) {
            (Language::English, SwapStatus::Success) => "Swap transaction successful",
            (Language::English, SwapStatus::Failure) => "Swap transaction failed",
            (Language::Indonesian, SwapStatus::Success) => "Transaksi swap berhasil",
            (Language::Indonesian, SwapStatus::Failure) => "Transaksi swap gagal",
        }
    }

    pub fn status_label(self, status: SwapStatus) -> &'static str {
        match (self, status) {
            (Language::English, SwapStatus::Success) => "success",
            (Language::English, SwapStatus::Failure) => "failure",
            (Language::Indonesian, SwapStatus::Success) => "sukses",
            (Language::Indonesian, SwapStatus::Failure) => "gagal",
        }
    }
}
