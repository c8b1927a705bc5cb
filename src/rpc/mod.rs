//! JSON-RPC transport used by the probes

mod client;

pub use client::{
    extract_result, parse_quantity, parse_u64_quantity, JsonRpcRequest, RpcClient, REQUEST_ID,
};

use alloy::primitives::Address;

/// The all-zero account, used as an inert `eth_getBalance` argument
pub const ZERO_ADDRESS: Address = Address::ZERO;
