//! Transaction building, signing, broadcasting and receipt polling.
//!
//! # Responsibilities
//! - Build legacy transactions with a static gas price and fixed gas limit
//! - Read the signer nonce from the node immediately before each build
//! - Sign and broadcast without waiting for inclusion
//! - Poll for receipts until mined or timed out

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout, MissedTickBehavior};

use crate::blockchain::client::RpcClient;
use crate::blockchain::types::{ChainError, ChainResult, GasPrice, TxReceipt};
use crate::blockchain::wallet::Wallet;
use crate::observability::metrics;

/// Gas limit for wrap and approve transactions.
pub const TOKEN_GAS_LIMIT: u64 = 100_000;

/// Gas limit for router swaps.
pub const SWAP_GAS_LIMIT: u64 = 200_000;

/// A state-changing contract call ready to be signed.
#[derive(Debug, Clone)]
pub struct ContractCall {
    /// Short label for logs and metrics ("wrap", "approve", "swap").
    pub kind: &'static str,
    pub to: Address,
    pub value: U256,
    pub input: Bytes,
    pub gas_limit: u64,
}

/// Signs and broadcasts transactions for one wallet.
#[derive(Debug, Clone)]
pub struct TxSubmitter {
    client: RpcClient,
    wallet: Wallet,
}

impl TxSubmitter {
    /// Create a new transaction submitter.
    pub fn new(client: RpcClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build the transaction request for `call`.
    ///
    /// The nonce is read from the node on every call; two submitters sharing
    /// a signer concurrently will race on it.
    pub async fn build(&self, call: ContractCall, gas_price: GasPrice) -> ChainResult<TransactionRequest> {
        let nonce = self.client.get_transaction_count(self.wallet.address()).await?;

        let tx = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(call.to)
            .with_value(call.value)
            .with_input(call.input)
            .with_nonce(nonce)
            .with_gas_price(gas_price.wei())
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(call.gas_limit);

        Ok(tx)
    }

    /// Build, sign and broadcast `call`. Returns the hash right after broadcast.
    pub async fn submit(&self, call: ContractCall, gas_price: GasPrice) -> ChainResult<TxHash> {
        let kind = call.kind;
        let to = call.to;
        let tx = self.build(call, gas_price).await?;
        let nonce = tx.nonce;
        let raw = self.wallet.sign_transaction(tx).await?;
        let tx_hash = self.client.send_raw_transaction(&raw).await?;

        metrics::record_transaction(kind);
        tracing::info!(
            kind,
            tx_hash = %tx_hash,
            to = %to,
            nonce = ?nonce,
            gas_price_gwei = gas_price.gwei(),
            "Transaction broadcast"
        );
        Ok(tx_hash)
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}

/// Polls the node for transaction receipts.
#[derive(Debug, Clone)]
pub struct ReceiptWatcher {
    client: RpcClient,
    timeout_duration: Duration,
    poll_interval: Duration,
}

impl ReceiptWatcher {
    pub fn new(client: RpcClient, timeout_secs: u64, poll_interval_ms: u64) -> Self {
        Self {
            client,
            timeout_duration: Duration::from_secs(timeout_secs),
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait until `tx_hash` is mined.
    ///
    /// Transient RPC errors while polling are logged and retried until the
    /// deadline; the deadline itself yields [`ChainError::TransactionTimeout`].
    pub async fn wait(&self, tx_hash: TxHash) -> ChainResult<TxReceipt> {
        let result = timeout(self.timeout_duration, async {
            let mut ticker = interval(self.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match self.client.get_transaction_receipt(tx_hash).await {
                    Ok(Some(receipt)) => {
                        return TxReceipt {
                            tx_hash,
                            success: receipt.status(),
                            block_number: receipt.block_number,
                            gas_used: receipt.gas_used,
                        };
                    }
                    Ok(None) => tracing::debug!(tx_hash = %tx_hash, "Transaction pending"),
                    Err(e) => tracing::debug!(tx_hash = %tx_hash, error = %e, "Receipt poll failed"),
                }
            }
        })
        .await;

        match result {
            Ok(receipt) => {
                tracing::info!(
                    tx_hash = %tx_hash,
                    success = receipt.success,
                    block_number = ?receipt.block_number,
                    gas_used = receipt.gas_used,
                    "Transaction mined"
                );
                Ok(receipt)
            }
            Err(_) => Err(ChainError::TransactionTimeout {
                tx_hash,
                secs: self.timeout_duration.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_limits() {
        assert_eq!(TOKEN_GAS_LIMIT, 100_000);
        assert_eq!(SWAP_GAS_LIMIT, 200_000);
    }

    #[tokio::test]
    async fn test_wait_times_out_against_dead_endpoint() {
        let client = RpcClient::new("http://127.0.0.1:9", 1).unwrap();
        let watcher = ReceiptWatcher::new(client, 1, 100);

        let err = watcher.wait(TxHash::ZERO).await.unwrap_err();
        assert!(matches!(err, ChainError::TransactionTimeout { secs: 1, .. }));
    }
}
