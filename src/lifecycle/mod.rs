//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Metrics exporter → Wallet → Chain gateway
//!         → Settings snapshot → Orchestrator
//!
//! Shutdown:
//!     Ctrl-C → dispatcher stops → process exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - The bot starts polling only after the node answered a liveness check

pub mod startup;

pub use startup::{start, AppContext, SharedOrchestrator, StartupError};
