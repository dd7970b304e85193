//! Slash commands and inline menu actions.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the main menu")]
    Start,
    #[command(description = "show usage instructions")]
    Help,
}

/// Inline menu buttons. The callback data doubles as the wire identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Swap,
    SetContract,
    SetGasPrice,
    SetAmount,
    ShowPopular,
    Help,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Swap,
        MenuAction::SetContract,
        MenuAction::SetGasPrice,
        MenuAction::SetAmount,
        MenuAction::ShowPopular,
        MenuAction::Help,
    ];

    pub fn callback_data(self) -> &'static str {
        match self {
            MenuAction::Swap => "swap",
            MenuAction::SetContract => "set_contract",
            MenuAction::SetGasPrice => "set_gasprice",
            MenuAction::SetAmount => "set_amount",
            MenuAction::ShowPopular => "show_popular",
            MenuAction::Help => "help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Swap => "💱 Swap",
            MenuAction::SetContract => "📜 Set Contract",
            MenuAction::SetGasPrice => "⛽ Set Gas Price",
            MenuAction::SetAmount => "📏 Set Amount",
            MenuAction::ShowPopular => "🏅 Show Popular Tokens",
            MenuAction::Help => "❓ Help",
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.callback_data() == data)
    }
}
