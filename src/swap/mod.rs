//! Swap orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! SettingsStore (current snapshot, updated by the bot)
//!     → SwapSettings::to_request (frozen per run)
//!     → SwapOrchestrator (one run per signer at a time)
//!         Idle → Wrapping → Approving → Swapping → Done | Failed
//!     → SwapOutcome (returned to the caller, never persisted)
//! ```

pub mod language;
pub mod orchestrator;
pub mod outcome;
pub mod settings;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use language::Language;
pub use orchestrator::{SwapError, SwapOrchestrator, DEADLINE_WINDOW_SECS, WRAP_AMOUNT};
pub use outcome::{SwapOutcome, SwapStatus};
pub use settings::{SettingsStore, SwapRequest, SwapSettings};
pub use state::SwapStage;
