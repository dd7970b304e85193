//! Telegram front end.
//!
//! # Data Flow
//! ```text
//! Telegram update
//!     → handlers::schema (dialogue state per chat)
//!         /start, /help        → menu and usage text
//!         menu buttons         → settings prompts, token list, swap run
//!         awaiting-* messages  → dialogue.rs parsers → SettingsStore
//!     → format.rs (HTML replies)
//! ```

pub mod commands;
pub mod dialogue;
pub mod format;
pub mod handlers;

use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*, utils::command::BotCommands};

use crate::lifecycle::startup::SharedOrchestrator;
use crate::swap::SettingsStore;

pub use commands::{Command, MenuAction};
pub use dialogue::DialogueState;

/// State shared by every handler.
pub struct BotContext {
    pub orchestrator: SharedOrchestrator,
    pub settings: Arc<SettingsStore>,
    pub explorer_url: String,
}

/// Register the command list and dispatch updates until Ctrl-C.
pub async fn run(bot: Bot, ctx: BotContext) {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!(error = %e, "Failed to register bot commands");
    }

    tracing::info!("Bot dispatcher started");
    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![
            InMemStorage::<DialogueState>::new(),
            Arc::new(ctx)
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    tracing::info!("Bot dispatcher stopped");
}
