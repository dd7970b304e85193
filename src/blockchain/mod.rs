//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, signer address)
//!     → wallet.rs (key loading, identity check, signing)
//!     → client.rs (RPC connection with timeouts)
//!     → contracts.rs (router / wrapped token / ERC20 calldata)
//!     → transaction.rs (build, sign, broadcast, poll receipt)
//!     → gateway.rs (ChainGateway operations used by the swap flow)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - Single endpoint, no failover

pub mod client;
pub mod contracts;
pub mod gateway;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::RpcClient;
pub use gateway::{ChainGateway, RpcGateway};
pub use types::{ChainConfig, ChainError, ChainId, ChainResult, GasPrice, SwapOrder, TxReceipt};
pub use wallet::Wallet;
