use bitcoin::{BlockHash, Txid};
use serde_json::json;

use crate::error::RpcError;

use super::super::pending::PendingCall;
use super::super::response::RpcResponse;
use super::client::RpcClient;

// Each entry expands into a blocking method and an `_async` twin that send
// the same RPC name and params.
macro_rules! rpc_methods {
    ($(
        $(#[$meta:meta])*
        $rpc:literal => fn $name:ident / $name_async:ident ($($arg:ident: $ty:ty),*) [$($param:expr),*];
    )*) => {
        impl RpcClient {
            $(
                $(#[$meta])*
                pub fn $name(&self, $($arg: $ty),*) -> Result<RpcResponse, RpcError> {
                    self.request($rpc, vec![$($param),*])
                }

                $(#[$meta])*
                pub fn $name_async(&self, $($arg: $ty),*) -> PendingCall {
                    self.request_async($rpc, vec![$($param),*])
                }
            )*
        }
    };
}

rpc_methods! {
    /// `getblockchaininfo`; decode with [`ChainInfo`](crate::rpc::ChainInfo).
    "getblockchaininfo" => fn get_blockchain_info / get_blockchain_info_async () [];
    "getnetworkinfo" => fn get_network_info / get_network_info_async () [];
    "getblockcount" => fn get_block_count / get_block_count_async () [];
    "getbestblockhash" => fn get_best_block_hash / get_best_block_hash_async () [];
    "getblockhash" => fn get_block_hash / get_block_hash_async (height: u64) [json!(height)];
    /// Verbose `getblockheader`; decode with [`BlockHeader`](crate::rpc::BlockHeader).
    "getblockheader" => fn get_block_header / get_block_header_async (hash: &BlockHash)
        [json!(hash.to_string())];
    /// `getblock <hash> <verbosity>`: 0 for hex, 1 for JSON with txids, 2 with decoded txs.
    "getblock" => fn get_block / get_block_async (hash: &BlockHash, verbosity: u8)
        [json!(hash.to_string()), json!(verbosity)];
    /// Older daemons only accept the numeric verbose flag, so `verbose` is sent as 0/1.
    "getrawtransaction" => fn get_raw_transaction / get_raw_transaction_async (txid: &Txid, verbose: bool)
        [json!(txid.to_string()), json!(u8::from(verbose))];
    /// Result is `null` when the output is spent or unknown.
    "gettxout" => fn get_tx_out / get_tx_out_async (txid: &Txid, vout: u32, include_mempool: bool)
        [json!(txid.to_string()), json!(vout), json!(include_mempool)];
    "getrawmempool" => fn get_raw_mempool / get_raw_mempool_async () [];
    "getmempoolinfo" => fn get_mempool_info / get_mempool_info_async () [];
    "getdifficulty" => fn get_difficulty / get_difficulty_async () [];
    "getconnectioncount" => fn get_connection_count / get_connection_count_async () [];
    "estimatesmartfee" => fn estimate_smart_fee / estimate_smart_fee_async (conf_target: u16)
        [json!(conf_target)];
    "sendrawtransaction" => fn send_raw_transaction / send_raw_transaction_async (tx_hex: &str)
        [json!(tx_hex)];
    /// Wallet balance in coin units; see [`to_satoshi`](crate::amount::to_satoshi).
    "getbalance" => fn get_balance / get_balance_async () [];
}
