//! Tea Assam swap bot library.
//!
//! Wraps native TEA, approves the router and swaps into a target token, driven
//! from Telegram or the command line.

pub mod blockchain;
pub mod bot;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod swap;
pub mod tokens;

pub use config::{load_config, AppConfig};
pub use lifecycle::{AppContext, SharedOrchestrator};
pub use swap::{SettingsStore, SwapOrchestrator, SwapOutcome};
