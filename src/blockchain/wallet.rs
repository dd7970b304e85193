//! Signer identity and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{ChainError, ChainResult};

/// Wallet holding the configured signer.
#[derive(Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> ChainResult<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::info!(
            address = %signer.address(),
            chain_id = chain_id,
            "Wallet initialized"
        );

        Ok(Self { signer, chain_id })
    }

    /// Create a wallet and check that the key controls `expected_address`.
    pub fn from_identity(
        private_key_hex: &str,
        expected_address: Address,
        chain_id: u64,
    ) -> ChainResult<Self> {
        let wallet = Self::from_private_key(private_key_hex, chain_id)?;
        if wallet.address() != expected_address {
            return Err(ChainError::Wallet(format!(
                "Private key controls {}, but configured address is {}",
                wallet.address(),
                expected_address
            )));
        }
        Ok(wallet)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a fully populated transaction request.
    ///
    /// Returns the EIP-2718 encoded envelope ready for `eth_sendRawTransaction`.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> ChainResult<Bytes> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = tx
            .build(&wallet)
            .await
            .map_err(|e| ChainError::TransactionSubmission(format!("Signing failed: {}", e)))?;
        Ok(envelope.encoded_2718().into())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 1).unwrap();
        assert_eq!(wallet.address().to_string().to_lowercase(), TEST_ADDRESS);
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet = Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY), 1).unwrap();
        assert_eq!(wallet.address().to_string().to_lowercase(), TEST_ADDRESS);
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::from_private_key("invalid_key", 1);
        assert!(result.unwrap_err().to_string().contains("Invalid private key"));
    }

    #[test]
    fn test_identity_mismatch_rejected() {
        let result = Wallet::from_identity(TEST_PRIVATE_KEY, Address::repeat_byte(0x01), 1);
        assert!(matches!(result, Err(ChainError::Wallet(_))));

        let expected: Address = TEST_ADDRESS.parse().unwrap();
        assert!(Wallet::from_identity(TEST_PRIVATE_KEY, expected, 1).is_ok());
    }

    #[test]
    fn test_debug_hides_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 1).unwrap();
        assert!(!format!("{:?}", wallet).contains(TEST_PRIVATE_KEY));
    }

    #[tokio::test]
    async fn test_sign_legacy_transaction() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let tx = TransactionRequest::default()
            .with_from(wallet.address())
            .with_to(Address::repeat_byte(0x22))
            .with_value(U256::from(1))
            .with_nonce(0)
            .with_gas_limit(100_000)
            .with_gas_price(1_000_000_000)
            .with_chain_id(31337);

        let raw = wallet.sign_transaction(tx).await.unwrap();
        // Legacy envelopes are RLP lists, not typed transactions
        assert!(raw[0] >= 0xc0);
    }

    #[tokio::test]
    async fn test_sign_incomplete_transaction_fails() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let tx = TransactionRequest::default().with_to(Address::repeat_byte(0x22));

        let err = wallet.sign_transaction(tx).await.unwrap_err();
        assert!(matches!(err, ChainError::TransactionSubmission(_)));
    }
}
