//! Swap orchestration: balance → wrap → approve → swap.
//!
//! Every step waits for the previous step's receipt. A failing step aborts
//! the run; transactions already broadcast are not rolled back.

use alloy::primitives::{Address, U256};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::gateway::ChainGateway;
use crate::blockchain::types::{to_tokens, ChainError, SwapOrder};
use crate::observability::metrics;
use crate::swap::outcome::{SwapOutcome, SwapStatus};
use crate::swap::settings::SwapRequest;
use crate::swap::state::SwapStage;

/// Amount wrapped on every run, in base units (1.0 native unit).
///
/// Independent of the requested swap amount.
pub const WRAP_AMOUNT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Seconds added to the latest block timestamp to form the swap deadline.
pub const DEADLINE_WINDOW_SECS: u64 = 600;

/// Errors that abort a swap run.
#[derive(Debug, Error)]
pub enum SwapError {
    /// A gateway call failed during `stage`.
    #[error("{} step failed: {source}", .stage.step_name())]
    Step {
        stage: SwapStage,
        #[source]
        source: ChainError,
    },

    /// Another run holds the signer.
    #[error("A swap is already in progress for this wallet")]
    InProgress,

    /// The request can never succeed, e.g. a zero amount.
    #[error("Invalid swap request: {0}")]
    InvalidRequest(String),

    #[error("Invalid swap stage transition from {from} to {to}")]
    InvalidTransition { from: SwapStage, to: SwapStage },
}

impl SwapError {
    /// The underlying chain error, if any.
    pub fn chain_error(&self) -> Option<&ChainError> {
        match self {
            SwapError::Step { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Runs swaps for the single signer behind `gateway`.
///
/// Holds the per-signer serialization point: at most one run is in flight.
pub struct SwapOrchestrator<G: ?Sized> {
    gateway: Arc<G>,
    in_flight: Mutex<()>,
}

impl<G: ChainGateway + ?Sized> SwapOrchestrator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            in_flight: Mutex::new(()),
        }
    }

    pub fn gateway(&self) -> &G {
        self.gateway.as_ref()
    }

    /// Run a swap, waiting for any run already in flight to finish first.
    pub async fn execute(&self, request: &SwapRequest) -> Result<SwapOutcome, SwapError> {
        let _guard = self.in_flight.lock().await;
        self.run(request).await
    }

    /// Run a swap, or fail with [`SwapError::InProgress`] if one is in flight.
    pub async fn try_execute(&self, request: &SwapRequest) -> Result<SwapOutcome, SwapError> {
        let _guard = self.in_flight.try_lock().map_err(|_| SwapError::InProgress)?;
        self.run(request).await
    }

    async fn run(&self, request: &SwapRequest) -> Result<SwapOutcome, SwapError> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        let span = tracing::info_span!(
            "swap",
            %run_id,
            target_token = %request.target_token,
            amount = %to_tokens(request.amount_in),
            gas_price_gwei = request.gas_price.gwei(),
        );

        let result = SwapRun::new(self.gateway.as_ref(), request, run_id)
            .execute()
            .instrument(span)
            .await;

        let status = match &result {
            Ok(outcome) => outcome.swap_status.as_str(),
            Err(_) => "error",
        };
        metrics::record_swap(status, started);
        result
    }
}

/// State of one run as it moves through [`SwapStage`]s.
struct SwapRun<'a, G: ?Sized> {
    gateway: &'a G,
    request: &'a SwapRequest,
    run_id: Uuid,
    stage: SwapStage,
}

impl<'a, G: ChainGateway + ?Sized> SwapRun<'a, G> {
    fn new(gateway: &'a G, request: &'a SwapRequest, run_id: Uuid) -> Self {
        Self {
            gateway,
            request,
            run_id,
            stage: SwapStage::Idle,
        }
    }

    fn advance(&mut self, to: SwapStage) -> Result<(), SwapError> {
        if !self.stage.can_transition_to(to) {
            return Err(SwapError::InvalidTransition {
                from: self.stage,
                to,
            });
        }
        tracing::debug!(from = %self.stage, to = %to, "Swap stage transition");
        self.stage = to;
        Ok(())
    }

    fn fail(&mut self, source: ChainError) -> SwapError {
        let stage = self.stage;
        tracing::error!(stage = %stage, error = %source, "Swap step failed, aborting run");
        self.stage = SwapStage::Failed;
        SwapError::Step { stage, source }
    }

    async fn execute(mut self) -> Result<SwapOutcome, SwapError> {
        let gateway = self.gateway;
        let request = self.request;
        let signer: Address = gateway.signer_address();
        let gas_price = request.gas_price;

        if request.amount_in.is_zero() {
            return Err(SwapError::InvalidRequest("amount must be greater than zero".to_string()));
        }

        let native_balance = gateway
            .native_balance(signer)
            .await
            .map_err(|e| self.fail(e))?;
        tracing::info!(native_balance = %to_tokens(native_balance), "Native balance read");

        self.advance(SwapStage::Wrapping)?;
        let wrap_tx_hash = gateway
            .wrap_native(WRAP_AMOUNT, gas_price)
            .await
            .map_err(|e| self.fail(e))?;
        gateway
            .wait_for_success(wrap_tx_hash)
            .await
            .map_err(|e| self.fail(e))?;

        self.advance(SwapStage::Approving)?;
        let wrapped_balance = gateway
            .wrapped_balance(signer)
            .await
            .map_err(|e| self.fail(e))?;
        tracing::info!(wrapped_balance = %to_tokens(wrapped_balance), "Wrapped balance read");

        let wrapped_token = gateway
            .wrapped_token_address()
            .await
            .map_err(|e| self.fail(e))?;
        let approval_tx_hash = gateway
            .approve(wrapped_token, gateway.router_address(), request.amount_in, gas_price)
            .await
            .map_err(|e| self.fail(e))?;
        gateway
            .wait_for_success(approval_tx_hash)
            .await
            .map_err(|e| self.fail(e))?;

        self.advance(SwapStage::Swapping)?;
        let block_time = gateway
            .latest_block_timestamp()
            .await
            .map_err(|e| self.fail(e))?;
        let order = SwapOrder {
            amount_in: request.amount_in,
            amount_out_min: U256::ZERO,
            path: vec![wrapped_token, request.target_token],
            recipient: signer,
            deadline: block_time.saturating_add(DEADLINE_WINDOW_SECS),
        };
        let swap_tx_hash = gateway
            .swap(&order, gas_price)
            .await
            .map_err(|e| self.fail(e))?;
        let receipt = gateway
            .wait_for_receipt(swap_tx_hash)
            .await
            .map_err(|e| self.fail(e))?;

        self.advance(SwapStage::Done)?;
        let swap_status = SwapStatus::from_receipt(&receipt);
        tracing::info!(
            swap_tx_hash = %swap_tx_hash,
            status = swap_status.as_str(),
            "Swap run finished"
        );

        Ok(SwapOutcome {
            run_id: self.run_id,
            native_balance,
            wrapped_balance,
            wrap_tx_hash,
            approval_tx_hash,
            swap_tx_hash,
            swap_status,
            message: request.language.swap_message(swap_status).to_string(),
            language: request.language,
        })
    }
}
