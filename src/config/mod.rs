//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (TEASWAP_CONFIG)
//!     → loader.rs (parse & deserialize, environment overlay)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!
//! Runtime reconfiguration (target token, gas price, amount) does not touch
//! AppConfig; it goes through swap::settings::SettingsStore.
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow running with environment only
//! - Secrets come from the environment, never from the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ChainConfig, ObservabilityConfig, Secrets, SwapDefaults};
