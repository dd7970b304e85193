//! Configuration loading from disk and the process environment.

use alloy::primitives::Address;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{AppConfig, Secrets};
use crate::config::validation::{validate_config, ValidationError};

/// Path of an optional TOML file with chain/swap/observability sections.
pub const CONFIG_PATH_ENV: &str = "TEASWAP_CONFIG";
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const USER_ADDRESS_ENV: &str = "USER_ADDRESS";
pub const CONTRACT_ADDRESS_ENV: &str = "CONTRACT_ADDRESS";
pub const GAS_PRICE_ENV: &str = "GAS_PRICE";
pub const AMOUNT_ENV: &str = "AMOUNT";
pub const LANGUAGE_ENV: &str = "BOT_LANGUAGE";
/// System locale, used only when no language is configured.
pub const LOCALE_ENV: &str = "LANG";

/// Error type for configuration loading. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML configuration file without the environment overlay.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the file (if any), overlay the environment seen through `lookup`, validate.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => AppConfig::default(),
    };

    apply_env(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from the process environment.
///
/// Reads the file named by `TEASWAP_CONFIG` when set.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    load_with(path.as_deref(), |key| std::env::var(key).ok())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    value.trim().parse().map_err(|e| ConfigError::Invalid {
        field,
        reason: format!("{}", e),
    })
}

/// Overlay secrets and swap defaults from the environment.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let private_key = required(&lookup, PRIVATE_KEY_ENV)?;
    let user_address = parse_address(USER_ADDRESS_ENV, &required(&lookup, USER_ADDRESS_ENV)?)?;
    let telegram_bot_token = lookup(BOT_TOKEN_ENV).filter(|token| !token.trim().is_empty());

    config.secrets = Secrets {
        telegram_bot_token,
        private_key,
        user_address,
    };

    if let Some(value) = lookup(CONTRACT_ADDRESS_ENV) {
        config.swap.target_token = parse_address(CONTRACT_ADDRESS_ENV, &value)?;
    }
    if let Some(value) = lookup(GAS_PRICE_ENV) {
        config.swap.gas_price_gwei = value.trim().parse().map_err(|e| ConfigError::Invalid {
            field: GAS_PRICE_ENV,
            reason: format!("{}", e),
        })?;
    }
    if let Some(value) = lookup(AMOUNT_ENV) {
        config.swap.amount = value.trim().to_string();
    }
    if let Some(value) = lookup(LANGUAGE_ENV) {
        config.swap.language = Some(value);
    } else if config.swap.language.is_none() {
        config.swap.language = lookup(LOCALE_ENV);
    }

    Ok(())
}

impl Secrets {
    /// The Telegram token, or a fatal [`ConfigError::Missing`].
    pub fn require_bot_token(&self) -> Result<&str, ConfigError> {
        self.telegram_bot_token
            .as_deref()
            .ok_or(ConfigError::Missing(BOT_TOKEN_ENV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn base_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (PRIVATE_KEY_ENV, "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"),
            (USER_ADDRESS_ENV, TEST_ADDRESS),
        ]
    }

    #[test]
    fn test_missing_private_key_is_fatal() {
        let err = load_with(None, env(&[(USER_ADDRESS_ENV, TEST_ADDRESS)])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(PRIVATE_KEY_ENV)));
    }

    #[test]
    fn test_missing_user_address_is_fatal() {
        let err = load_with(None, env(&[(PRIVATE_KEY_ENV, "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(USER_ADDRESS_ENV)));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut pairs = base_env();
        pairs.push((GAS_PRICE_ENV, "25"));
        pairs.push((AMOUNT_ENV, "2.5"));
        pairs.push((CONTRACT_ADDRESS_ENV, "0x9faE22428bBA5De88730e9C7Ccab79c8d1Ac34E5"));
        pairs.push((LANGUAGE_ENV, "id_ID"));

        let config = load_with(None, env(&pairs)).unwrap();
        assert_eq!(config.swap.gas_price_gwei, 25);
        assert_eq!(config.swap.amount, "2.5");
        assert_eq!(
            config.swap.target_token,
            "0x9faE22428bBA5De88730e9C7Ccab79c8d1Ac34E5".parse::<Address>().unwrap()
        );
        assert_eq!(config.swap.language.as_deref(), Some("id_ID"));
        assert_eq!(config.secrets.user_address, TEST_ADDRESS.parse::<Address>().unwrap());
    }

    #[test]
    fn test_invalid_gas_price_rejected() {
        let mut pairs = base_env();
        pairs.push((GAS_PRICE_ENV, "fast"));
        let err = load_with(None, env(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: GAS_PRICE_ENV, .. }));
    }

    #[test]
    fn test_invalid_amount_fails_validation() {
        let mut pairs = base_env();
        pairs.push((AMOUNT_ENV, "0"));
        let err = load_with(None, env(&pairs)).unwrap_err();
        assert!(err.to_string().contains("swap.amount"));
    }

    #[test]
    fn test_bot_token_required_on_demand() {
        let config = load_with(None, env(&base_env())).unwrap();
        assert!(matches!(
            config.secrets.require_bot_token(),
            Err(ConfigError::Missing(BOT_TOKEN_ENV))
        ));

        let mut pairs = base_env();
        pairs.push((BOT_TOKEN_ENV, "123:abc"));
        let config = load_with(None, env(&pairs)).unwrap();
        assert_eq!(config.secrets.require_bot_token().unwrap(), "123:abc");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [chain]
            rpc_url = "http://localhost:8545"
            chain_id = 31337
            receipt_timeout_secs = 30

            [swap]
            gas_price_gwei = 5
            "#
        )
        .unwrap();

        let config = load_with(Some(file.path()), env(&base_env())).unwrap();
        assert_eq!(config.chain.chain_id, 31337);
        assert_eq!(config.chain.receipt_timeout_secs, 30);
        assert_eq!(config.swap.gas_price_gwei, 5);
    }

    #[test]
    fn test_file_language_wins_over_system_locale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[swap]\nlanguage = \"id_ID\"").unwrap();

        let mut pairs = base_env();
        pairs.push((LOCALE_ENV, "en_US.UTF-8"));
        let config = load_with(Some(file.path()), env(&pairs)).unwrap();
        assert_eq!(config.swap.language.as_deref(), Some("id_ID"));

        pairs.push((LANGUAGE_ENV, "en"));
        let config = load_with(Some(file.path()), env(&pairs)).unwrap();
        assert_eq!(config.swap.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_system_locale_used_when_language_unset() {
        let mut pairs = base_env();
        pairs.push((LOCALE_ENV, "id_ID.UTF-8"));
        let config = load_with(None, env(&pairs)).unwrap();
        assert_eq!(config.swap.language.as_deref(), Some("id_ID.UTF-8"));

        let config = load_with(None, env(&base_env())).unwrap();
        assert_eq!(config.swap.language, None);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain\nrpc_url = ").unwrap();

        let err = load_with(Some(file.path()), env(&base_env())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
