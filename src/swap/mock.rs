//! In-memory [`ChainGateway`] for orchestrator tests.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Semaphore;

use crate::blockchain::gateway::ChainGateway;
use crate::blockchain::types::{ChainError, ChainResult, GasPrice, SwapOrder, TxReceipt};

pub const SIGNER: Address = Address::repeat_byte(0xaa);
pub const ROUTER: Address = Address::repeat_byte(0xbb);
pub const WRAPPED: Address = Address::repeat_byte(0xcc);
pub const BLOCK_TIME: u64 = 1_700_000_000;

/// How a mocked transaction step behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Mined,
    Reverted,
    TimedOut,
    Rejected,
}

const WRAP_TAG: u8 = 1;
const APPROVE_TAG: u8 = 2;
const SWAP_TAG: u8 = 3;

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    calls: Vec<&'static str>,
    nonces: Vec<u64>,
    next_nonce: u64,
    wrapped: U256,
    approvals: Vec<(Address, Address, U256)>,
    orders: Vec<SwapOrder>,
    pending_wrap: U256,
}

pub struct MockGateway {
    pub native: U256,
    /// When set, reading the native balance fails.
    pub native_unavailable: bool,
    /// Timestamp reported for the latest block.
    pub block_time: u64,
    pub wrap: Step,
    pub approve: Step,
    pub swap: Step,
    /// When set, waiting on a wrap receipt blocks until a permit is added.
    pub wrap_gate: Option<Semaphore>,
    pub(crate) ledger: Mutex<Ledger>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            native: U256::ZERO,
            native_unavailable: false,
            block_time: BLOCK_TIME,
            wrap: Step::Mined,
            approve: Step::Mined,
            swap: Step::Mined,
            wrap_gate: None,
            ledger: Mutex::new(Ledger::default()),
        }
    }
}

impl MockGateway {
    pub fn calls(&self) -> Vec<&'static str> {
        self.ledger.lock().unwrap().calls.clone()
    }

    pub fn submitted_nonces(&self) -> Vec<u64> {
        self.ledger.lock().unwrap().nonces.clone()
    }

    pub fn approvals(&self) -> Vec<(Address, Address, U256)> {
        self.ledger.lock().unwrap().approvals.clone()
    }

    pub fn orders(&self) -> Vec<SwapOrder> {
        self.ledger.lock().unwrap().orders.clone()
    }

    fn record(&self, call: &'static str) {
        self.ledger.lock().unwrap().calls.push(call);
    }

    fn submit(&self, call: &'static str, step: Step, tag: u8) -> ChainResult<TxHash> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.calls.push(call);
        if step == Step::Rejected {
            return Err(ChainError::TransactionSubmission("nonce too low".to_string()));
        }
        let nonce = ledger.next_nonce;
        ledger.next_nonce += 1;
        ledger.nonces.push(nonce);

        let mut hash = TxHash::ZERO;
        hash[0] = tag;
        hash[31] = nonce as u8;
        Ok(hash)
    }

    fn receipt(step: Step, tx_hash: TxHash) -> ChainResult<TxReceipt> {
        match step {
            Step::TimedOut => Err(ChainError::TransactionTimeout { tx_hash, secs: 120 }),
            Step::Mined | Step::Reverted | Step::Rejected => Ok(TxReceipt {
                tx_hash,
                success: step == Step::Mined,
                block_number: Some(1),
                gas_used: 50_000,
            }),
        }
    }
}

#[async_trait]
impl ChainGateway for MockGateway {
    fn signer_address(&self) -> Address {
        SIGNER
    }

    fn router_address(&self) -> Address {
        ROUTER
    }

    async fn native_balance(&self, _address: Address) -> ChainResult<U256> {
        self.record("native_balance");
        if self.native_unavailable {
            return Err(ChainError::Rpc("eth_getBalance: connection reset".to_string()));
        }
        Ok(self.native)
    }

    async fn wrapped_token_address(&self) -> ChainResult<Address> {
        self.record("wrapped_token_address");
        Ok(WRAPPED)
    }

    async fn wrapped_balance(&self, _address: Address) -> ChainResult<U256> {
        self.record("wrapped_balance");
        Ok(self.ledger.lock().unwrap().wrapped)
    }

    async fn latest_block_timestamp(&self) -> ChainResult<u64> {
        self.record("latest_block_timestamp");
        Ok(self.block_time)
    }

    async fn wrap_native(&self, amount: U256, _gas_price: GasPrice) -> ChainResult<TxHash> {
        let hash = self.submit("wrap", self.wrap, WRAP_TAG)?;
        self.ledger.lock().unwrap().pending_wrap = amount;
        Ok(hash)
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        _gas_price: GasPrice,
    ) -> ChainResult<TxHash> {
        let hash = self.submit("approve", self.approve, APPROVE_TAG)?;
        self.ledger.lock().unwrap().approvals.push((token, spender, amount));
        Ok(hash)
    }

    async fn swap(&self, order: &SwapOrder, _gas_price: GasPrice) -> ChainResult<TxHash> {
        let hash = self.submit("swap", self.swap, SWAP_TAG)?;
        self.ledger.lock().unwrap().orders.push(order.clone());
        Ok(hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<TxReceipt> {
        match tx_hash[0] {
            WRAP_TAG => {
                self.record("wait_wrap");
                if let Some(gate) = &self.wrap_gate {
                    gate.acquire().await.expect("gate closed").forget();
                }
                let receipt = Self::receipt(self.wrap, tx_hash)?;
                if receipt.success {
                    let mut ledger = self.ledger.lock().unwrap();
                    let pending = ledger.pending_wrap;
                    ledger.wrapped += pending;
                }
                Ok(receipt)
            }
            APPROVE_TAG => {
                self.record("wait_approve");
                Self::receipt(self.approve, tx_hash)
            }
            _ => {
                self.record("wait_swap");
                Self::receipt(self.swap, tx_hash)
            }
        }
    }
}
