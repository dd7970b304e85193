//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (block, balances, nonces, receipts, contract calls)
//! - Broadcast raw signed transactions
//! - Bound every request by the configured timeout

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{ChainError, ChainId, ChainResult};

/// JSON-RPC client bound to a single endpoint.
#[derive(Clone)]
pub struct RpcClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcClient {
    /// Create a client for `rpc_url`.
    ///
    /// No request is made here; callers verify liveness with
    /// [`RpcClient::get_chain_id`].
    pub fn new(rpc_url: &str, timeout_secs: u64) -> ChainResult<Self> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ChainError::Connection(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        Ok(Self {
            provider: Arc::new(ProviderBuilder::new().connect_http(url)),
            rpc_url: rpc_url.to_string(),
            timeout_duration: Duration::from_secs(timeout_secs),
        })
    }

    async fn request<T, E, F>(&self, op: &'static str, fut: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(op, rpc_url = %self.rpc_url, error = %e, "RPC error");
                Err(ChainError::Rpc(format!("{}: {}", op, e)))
            }
            Err(_) => {
                tracing::warn!(op, rpc_url = %self.rpc_url, "RPC timeout");
                Err(ChainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<ChainId> {
        self.request("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.request("eth_blockNumber", self.provider.get_block_number())
            .await
    }

    /// Get the timestamp of the latest block.
    pub async fn latest_block_timestamp(&self) -> ChainResult<u64> {
        let block = self
            .request(
                "eth_getBlockByNumber",
                self.provider.get_block_by_number(BlockNumberOrTag::Latest),
            )
            .await?
            .ok_or_else(|| ChainError::Rpc("Latest block not available".to_string()))?;
        Ok(block.header.timestamp)
    }

    /// Get the balance of an address.
    pub async fn get_balance(&self, address: Address) -> ChainResult<U256> {
        self.request("eth_getBalance", self.provider.get_balance(address))
            .await
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.request(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address),
        )
        .await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.request(
            "eth_getTransactionReceipt",
            self.provider.get_transaction_receipt(tx_hash),
        )
        .await
    }

    /// Execute a read-only contract call.
    pub async fn call(&self, to: Address, input: Bytes) -> ChainResult<Bytes> {
        let tx = TransactionRequest::default().to(to).input(input.into());
        self.request("eth_call", self.provider.call(tx)).await
    }

    /// Broadcast a signed, encoded transaction. Returns without waiting for inclusion.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> ChainResult<TxHash> {
        match timeout(self.timeout_duration, self.provider.send_raw_transaction(raw)).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::TransactionSubmission(format!("Broadcast failed: {}", e))),
            Err(_) => Err(ChainError::TransactionSubmission(format!(
                "Broadcast timed out after {} seconds",
                self.timeout_duration.as_secs()
            ))),
        }
    }

    /// Get the configured endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
