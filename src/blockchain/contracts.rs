//! Contract ABIs and calldata encoding for the router and wrapped token.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::types::{ChainError, ChainResult, SwapOrder};

sol! {
    /// Uniswap-V2 style router.
    interface ISwapRouter {
        function WETH() external view returns (address);
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);
    }

    /// Wrapped native currency (WETH9 layout).
    interface IWrappedNative {
        function deposit() external payable;
    }

    /// Minimal ERC20 surface.
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function approve(address spender, uint256 value) external returns (bool);
    }
}

pub fn encode_wrapped_token_query() -> Bytes {
    ISwapRouter::WETHCall {}.abi_encode().into()
}

pub fn decode_wrapped_token_address(data: &[u8]) -> ChainResult<Address> {
    ISwapRouter::WETHCall::abi_decode_returns(data).map_err(|e| ChainError::Decode {
        call: "WETH",
        reason: e.to_string(),
    })
}

pub fn encode_deposit() -> Bytes {
    IWrappedNative::depositCall {}.abi_encode().into()
}

pub fn encode_balance_of(owner: Address) -> Bytes {
    IERC20::balanceOfCall { owner }.abi_encode().into()
}

pub fn decode_balance(data: &[u8]) -> ChainResult<U256> {
    IERC20::balanceOfCall::abi_decode_returns(data).map_err(|e| ChainError::Decode {
        call: "balanceOf",
        reason: e.to_string(),
    })
}

pub fn encode_approve(spender: Address, value: U256) -> Bytes {
    IERC20::approveCall { spender, value }.abi_encode().into()
}

pub fn encode_swap(order: &SwapOrder) -> Bytes {
    ISwapRouter::swapExactTokensForTokensCall {
        amountIn: order.amount_in,
        amountOutMin: order.amount_out_min,
        path: order.path.clone(),
        to: order.recipient,
        deadline: U256::from(order.deadline),
    }
    .abi_encode()
    .into()
}
