//! Chain gateway: every direct interaction the swap flow has with the node.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::blockchain::client::RpcClient;
use crate::blockchain::contracts;
use crate::blockchain::transaction::{
    ContractCall, ReceiptWatcher, TxSubmitter, SWAP_GAS_LIMIT, TOKEN_GAS_LIMIT,
};
use crate::blockchain::types::{
    ChainConfig, ChainError, ChainResult, GasPrice, SwapOrder, TxReceipt,
};
use crate::blockchain::wallet::Wallet;
use crate::observability::metrics;

/// Balance queries and transaction primitives against one chain and signer.
///
/// Mutating methods read the signer nonce from the node at call time. Two
/// callers submitting concurrently for the same signer can receive the same
/// nonce; callers must serialize submissions per signer.
#[async_trait]
pub trait ChainGateway: Send + Sync {
    /// Address of the configured signer.
    fn signer_address(&self) -> Address;

    /// Address of the swap router.
    fn router_address(&self) -> Address;

    /// Native balance of `address` in base units.
    async fn native_balance(&self, address: Address) -> ChainResult<U256>;

    /// The router's canonical wrapped-native token. Queried fresh every call.
    async fn wrapped_token_address(&self) -> ChainResult<Address>;

    /// Wrapped-token balance of `address` in base units.
    async fn wrapped_balance(&self, address: Address) -> ChainResult<U256>;

    /// Timestamp of the latest block.
    async fn latest_block_timestamp(&self) -> ChainResult<u64>;

    /// Deposit `amount` base units of native currency into the wrapped token.
    async fn wrap_native(&self, amount: U256, gas_price: GasPrice) -> ChainResult<TxHash>;

    /// ERC20 `approve(spender, amount)` on `token`.
    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        gas_price: GasPrice,
    ) -> ChainResult<TxHash>;

    /// Router `swapExactTokensForTokens`.
    async fn swap(&self, order: &SwapOrder, gas_price: GasPrice) -> ChainResult<TxHash>;

    /// Wait until `tx_hash` is mined, whatever its status.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<TxReceipt>;

    /// Wait until `tx_hash` is mined and fail if it reverted.
    async fn wait_for_success(&self, tx_hash: TxHash) -> ChainResult<TxReceipt> {
        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.success {
            return Err(ChainError::TransactionReverted { tx_hash });
        }
        Ok(receipt)
    }
}

/// [`ChainGateway`] backed by a JSON-RPC node.
#[derive(Debug, Clone)]
pub struct RpcGateway {
    client: RpcClient,
    submitter: TxSubmitter,
    receipts: ReceiptWatcher,
    config: ChainConfig,
}

impl RpcGateway {
    /// Connect to the configured node.
    ///
    /// Fails with [`ChainError::Connection`] if the node does not answer the
    /// `eth_chainId` liveness check, and with [`ChainError::ChainMismatch`]
    /// if it serves a different chain.
    pub async fn connect(config: &ChainConfig, wallet: Wallet) -> ChainResult<Self> {
        let client = RpcClient::new(&config.rpc_url, config.rpc_timeout_secs)?;

        let chain_id = match client.get_chain_id().await {
            Ok(id) => id,
            Err(e) => {
                metrics::record_rpc_health(false);
                return Err(ChainError::Connection(format!(
                    "{} did not answer liveness check: {}",
                    config.rpc_url, e
                )));
            }
        };
        metrics::record_rpc_health(true);

        if chain_id.0 != config.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: config.chain_id,
                actual: chain_id.0,
            });
        }

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            signer = %wallet.address(),
            router = %config.router_address,
            "Chain gateway connected"
        );

        let receipts = ReceiptWatcher::new(
            client.clone(),
            config.receipt_timeout_secs,
            config.receipt_poll_interval_ms,
        );

        Ok(Self {
            submitter: TxSubmitter::new(client.clone(), wallet),
            client,
            receipts,
            config: config.clone(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

#[async_trait]
impl ChainGateway for RpcGateway {
    fn signer_address(&self) -> Address {
        self.submitter.address()
    }

    fn router_address(&self) -> Address {
        self.config.router_address
    }

    async fn native_balance(&self, address: Address) -> ChainResult<U256> {
        self.client.get_balance(address).await
    }

    async fn wrapped_token_address(&self) -> ChainResult<Address> {
        let data = self
            .client
            .call(self.config.router_address, contracts::encode_wrapped_token_query())
            .await?;
        contracts::decode_wrapped_token_address(&data)
    }

    async fn wrapped_balance(&self, address: Address) -> ChainResult<U256> {
        let token = self.wrapped_token_address().await?;
        let data = self
            .client
            .call(token, contracts::encode_balance_of(address))
            .await?;
        contracts::decode_balance(&data)
    }

    async fn latest_block_timestamp(&self) -> ChainResult<u64> {
        self.client.latest_block_timestamp().await
    }

    async fn wrap_native(&self, amount: U256, gas_price: GasPrice) -> ChainResult<TxHash> {
        let token = self.wrapped_token_address().await?;
        let call = ContractCall {
            kind: "wrap",
            to: token,
            value: amount,
            input: contracts::encode_deposit(),
            gas_limit: TOKEN_GAS_LIMIT,
        };
        self.submitter.submit(call, gas_price).await
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        gas_price: GasPrice,
    ) -> ChainResult<TxHash> {
        let call = ContractCall {
            kind: "approve",
            to: token,
            value: U256::ZERO,
            input: contracts::encode_approve(spender, amount),
            gas_limit: TOKEN_GAS_LIMIT,
        };
        self.submitter.submit(call, gas_price).await
    }

    async fn swap(&self, order: &SwapOrder, gas_price: GasPrice) -> ChainResult<TxHash> {
        let call = ContractCall {
            kind: "swap",
            to: self.config.router_address,
            value: U256::ZERO,
            input: contracts::encode_swap(order),
            gas_limit: SWAP_GAS_LIMIT,
        };
        self.submitter.submit(call, gas_price).await
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<TxReceipt> {
        self.receipts.wait(tx_hash).await
    }
}
