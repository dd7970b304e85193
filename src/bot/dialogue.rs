//! Dialogue states for collecting new settings from the chat.

use alloy::primitives::{Address, U256};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use thiserror::Error;

use crate::blockchain::types::{parse_amount, GasPrice};
use crate::tokens;

/// Which value the bot is waiting for, per chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingContract,
    AwaitingGasPrice,
    AwaitingAmount,
}

pub type SwapDialogue = Dialogue<DialogueState, InMemStorage<DialogueState>>;

/// Rejected chat input. The message is shown to the user as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("❌ Please enter a valid contract address (0x...) or a listed token name.")]
    InvalidAddress,

    #[error("❌ Please enter a valid number.")]
    InvalidGasPrice,

    #[error("❌ Please enter a valid number (e.g., 1.5).")]
    InvalidAmount,
}

/// Accept a hex address or the name of a token from the popular list.
pub fn parse_contract_input(text: &str) -> Result<Address, InputError> {
    let text = text.trim();
    if let Ok(address) = text.parse::<Address>() {
        if address != Address::ZERO {
            return Ok(address);
        }
        return Err(InputError::InvalidAddress);
    }
    tokens::find_by_name(text)
        .map(|token| token.address)
        .ok_or(InputError::InvalidAddress)
}

pub fn parse_gas_price_input(text: &str) -> Result<GasPrice, InputError> {
    match text.trim().parse::<u64>() {
        Ok(gwei) if gwei > 0 => Ok(GasPrice::from_gwei(gwei)),
        _ => Err(InputError::InvalidGasPrice),
    }
}

pub fn parse_amount_input(text: &str) -> Result<U256, InputError> {
    parse_amount(text).map_err(|_| InputError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_input() {
        let expected: Address = "0x9faE22428bBA5De88730e9C7Ccab79c8d1Ac34E5".parse().unwrap();
        assert_eq!(
            parse_contract_input(" 0x9faE22428bBA5De88730e9C7Ccab79c8d1Ac34E5 "),
            Ok(expected)
        );
        assert_eq!(parse_contract_input("Tea USD"), Ok(expected));
        assert_eq!(parse_contract_input("0x1234"), Err(InputError::InvalidAddress));
        assert_eq!(
            parse_contract_input("0x0000000000000000000000000000000000000000"),
            Err(InputError::InvalidAddress)
        );
    }

    #[test]
    fn test_gas_price_input() {
        assert_eq!(parse_gas_price_input("1500").unwrap().gwei(), 1500);
        assert_eq!(parse_gas_price_input("0"), Err(InputError::InvalidGasPrice));
        assert_eq!(parse_gas_price_input("1.5"), Err(InputError::InvalidGasPrice));
    }

    #[test]
    fn test_amount_input() {
        assert_eq!(parse_amount_input("1.5").unwrap(), parse_amount("1.5").unwrap());
        assert_eq!(parse_amount_input("-3"), Err(InputError::InvalidAmount));
        assert_eq!(parse_amount_input("lots"), Err(InputError::InvalidAmount));
    }
}
