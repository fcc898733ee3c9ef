//! Typed results for a few daemon methods.
//!
//! Everything else is returned as raw JSON through
//! [`RpcResponse`](super::RpcResponse); these structs are decoded with
//! [`RpcResponse::deserialize`](super::RpcResponse::deserialize).

use bitcoin::BlockHash;
use serde::Deserialize;

// ==============================================================================
// Chain Info
// ==============================================================================

/// Basic chain information from `getblockchaininfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: BlockHash,
    pub difficulty: f64,
    #[serde(default)]
    pub pruned: bool,
}

// ==============================================================================
// Block Header
// ==============================================================================

/// Verbose `getblockheader` result.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    pub hash: BlockHash,
    pub confirmations: i64,
    pub height: u64,
    pub version: i32,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    pub time: u64,
    pub nonce: u32,
    pub bits: String,
    pub difficulty: f64,
    #[serde(rename = "previousblockhash", default)]
    pub previous_block_hash: Option<BlockHash>,
    #[serde(rename = "nextblockhash", default)]
    pub next_block_hash: Option<BlockHash>,
}
