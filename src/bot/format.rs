//! HTML rendering of bot replies.

use alloy::primitives::TxHash;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::commands::MenuAction;
use crate::swap::{SwapOutcome, SwapSettings};
use crate::tokens::{self, POPULAR_TOKENS};

/// `<explorer>/tx/<hash>`.
pub fn explorer_tx_url(explorer_url: &str, tx_hash: &TxHash) -> String {
    format!("{}/tx/{}", explorer_url.trim_end_matches('/'), tx_hash)
}

pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        MenuAction::ALL
            .into_iter()
            .map(|action| vec![InlineKeyboardButton::callback(action.label(), action.callback_data())]),
    )
}

pub fn welcome_text(settings: &SwapSettings) -> String {
    format!(
        "🔹 Welcome to Swap Tea Assam Bot!\n\n{}\nUse the buttons below to interact:",
        format_settings(settings)
    )
}

pub fn format_settings(settings: &SwapSettings) -> String {
    let target = match tokens::find_by_address(settings.target_token) {
        Some(token) => format!("<code>{}</code> ({})", settings.target_token, token.name),
        None => format!("<code>{}</code>", settings.target_token),
    };
    format!(
        "<b>⚙️ Current Settings:</b>\n\
         🔹 <b>Contract:</b> {}\n\
         🔹 <b>Gas Price:</b> {} gwei\n\
         🔹 <b>Amount:</b> {}\n",
        target,
        settings.gas_price.gwei(),
        settings.amount_tokens()
    )
}

pub fn help_text() -> &'static str {
    "📌 <b>Usage Instructions:</b>\n\
     💱 <b>Swap</b> - Execute swap transaction\n\
     📜 <b>Set Contract</b> - Change contract address\n\
     ⛽ <b>Set Gas Price</b> - Change gas price\n\
     📏 <b>Set Amount</b> - Change swap amount\n\
     🏅 <b>Show Popular Tokens</b> - Display popular tokens list\n\
     ❓ <b>Help</b> - Show this help message"
}

pub fn format_popular_tokens() -> String {
    let mut text = String::from("<b>🏅 Popular Tokens List:</b>\n\n");
    for token in POPULAR_TOKENS {
        text.push_str(&format!(
            "🔹 <b>{}</b>: <code><i>{}</i></code>\n",
            token.name.to_uppercase(),
            token.address
        ));
    }
    text
}

pub fn format_outcome(outcome: &SwapOutcome, explorer_url: &str) -> String {
    let status_icon = if outcome.is_success() { "✅" } else { "❌" };
    format!(
        "<b>🔹 Swap Transaction Result:</b>\n\
         🔹 <b>Tea Balance:</b> <code>{}</code>\n\
         🔹 <b>WTea Balance:</b> <code>{}</code>\n\
         🔹 <b>Wrap TX Hash:</b> <code>{}</code>\n\
         🔹 <b>Approval TX Hash:</b> <code>{}</code>\n\
         🔹 <b>Swap TX Hash:</b> <a href=\"{}\">{}</a>\n\
         🔹 <b>Status:</b> {} {}\n\
         🔹 <b>Message:</b> {}\n",
        outcome.native_balance_tokens(),
        outcome.wtea_balance_tokens(),
        outcome.wrap_tx_hash,
        outcome.approval_tx_hash,
        explorer_tx_url(explorer_url, &outcome.swap_tx_hash),
        outcome.swap_tx_hash,
        status_icon,
        outcome.status_label(),
        outcome.message,
    )
}
