//! Update handlers and the dispatcher schema.

use std::sync::Arc;
use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateFilterExt, UpdateHandler},
    prelude::*,
    types::{ChatId, ParseMode},
};

use crate::blockchain::types::to_tokens;
use crate::bot::commands::{Command, MenuAction};
use crate::bot::dialogue::{
    parse_amount_input, parse_contract_input, parse_gas_price_input, DialogueState, SwapDialogue,
};
use crate::bot::format;
use crate::bot::BotContext;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Routing: slash commands first, then pending dialogue input, then menu buttons.
pub fn schema() -> UpdateHandler<HandlerError> {
    use dptree::case;

    let message_handler = Update::filter_message()
        .branch(teloxide::filter_command::<Command, _>().endpoint(handle_command))
        .branch(case![DialogueState::AwaitingContract].endpoint(receive_contract))
        .branch(case![DialogueState::AwaitingGasPrice].endpoint(receive_gas_price))
        .branch(case![DialogueState::AwaitingAmount].endpoint(receive_amount));

    let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

    dialogue::enter::<Update, InMemStorage<DialogueState>, DialogueState, _>()
        .branch(message_handler)
        .branch(callback_handler)
}

async fn send_html(bot: &Bot, chat_id: ChatId, text: impl Into<String>) -> HandlerResult {
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: SwapDialogue,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    tracing::info!(chat_id = msg.chat.id.0, command = ?cmd, "Received command");
    dialogue.update(DialogueState::Idle).await?;
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, format::welcome_text(&ctx.settings.snapshot()))
                .parse_mode(ParseMode::Html)
                .reply_markup(format::main_menu())
                .await?;
        }
        Command::Help => send_html(&bot, msg.chat.id, format::help_text()).await?,
    }
    Ok(())
}

async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: SwapDialogue,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(chat_id) = q.message.as_ref().map(|m| m.chat().id) else {
        return Ok(());
    };
    let Some(action) = q.data.as_deref().and_then(MenuAction::parse) else {
        tracing::warn!(chat_id = chat_id.0, data = ?q.data, "Unknown callback data");
        return Ok(());
    };
    tracing::info!(chat_id = chat_id.0, action = action.callback_data(), "Menu action");

    match action {
        MenuAction::Swap => run_swap(&bot, chat_id, &ctx).await?,
        MenuAction::SetContract => {
            dialogue.update(DialogueState::AwaitingContract).await?;
            bot.send_message(chat_id, "📝 Enter new contract address:").await?;
        }
        MenuAction::SetGasPrice => {
            dialogue.update(DialogueState::AwaitingGasPrice).await?;
            bot.send_message(chat_id, "📝 Enter new gas price (in numbers):").await?;
        }
        MenuAction::SetAmount => {
            dialogue.update(DialogueState::AwaitingAmount).await?;
            bot.send_message(chat_id, "📝 Enter new amount (e.g., 1.5):").await?;
        }
        MenuAction::ShowPopular => send_html(&bot, chat_id, format::format_popular_tokens()).await?,
        MenuAction::Help => send_html(&bot, chat_id, format::help_text()).await?,
    }
    Ok(())
}

async fn run_swap(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> HandlerResult {
    let request = ctx.settings.snapshot().to_request();
    match ctx.orchestrator.try_execute(&request).await {
        Ok(outcome) => {
            tracing::info!(
                chat_id = chat_id.0,
                run_id = %outcome.run_id,
                status = outcome.swap_status.as_str(),
                "Swap finished"
            );
            send_html(bot, chat_id, format::format_outcome(&outcome, &ctx.explorer_url)).await
        }
        Err(e) => {
            tracing::error!(chat_id = chat_id.0, error = %e, "Swap failed");
            bot.send_message(chat_id, format!("❌ Error: {e}")).await?;
            Ok(())
        }
    }
}

async fn receive_contract(
    bot: Bot,
    msg: Message,
    dialogue: SwapDialogue,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    match parse_contract_input(msg.text().unwrap_or_default()) {
        Ok(address) => {
            ctx.settings.set_target_token(address);
            dialogue.update(DialogueState::Idle).await?;
            send_html(
                &bot,
                msg.chat.id,
                format!("✅ Contract Address updated:\n<code>{address}</code>"),
            )
            .await
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
            Ok(())
        }
    }
}

async fn receive_gas_price(
    bot: Bot,
    msg: Message,
    dialogue: SwapDialogue,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    match parse_gas_price_input(msg.text().unwrap_or_default()) {
        Ok(gas_price) => {
            ctx.settings.set_gas_price(gas_price);
            dialogue.update(DialogueState::Idle).await?;
            send_html(
                &bot,
                msg.chat.id,
                format!("✅ Gas Price updated: <b>{}</b>", gas_price.gwei()),
            )
            .await
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
            Ok(())
        }
    }
}

async fn receive_amount(
    bot: Bot,
    msg: Message,
    dialogue: SwapDialogue,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    match parse_amount_input(msg.text().unwrap_or_default()) {
        Ok(amount) => {
            ctx.settings.set_amount(amount);
            dialogue.update(DialogueState::Idle).await?;
            send_html(
                &bot,
                msg.chat.id,
                format!("✅ Amount updated: <b>{}</b>", to_tokens(amount)),
            )
            .await
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
            Ok(())
        }
    }
}
