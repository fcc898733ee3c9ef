use serde::Serialize;

use crate::error::RpcError;

/// JSON-RPC version sent unless the caller overrides it.
pub(super) const DEFAULT_JSONRPC_VERSION: &str = "1.0";

/// Wire form of a single call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<serde_json::Value>,
    pub jsonrpc: String,
    pub id: String,
}

impl RpcRequest {
    /// Build a request; fails on an empty method name.
    pub fn new(
        method: &str,
        params: Vec<serde_json::Value>,
        jsonrpc: &str,
        id: String,
    ) -> Result<Self, RpcError> {
        if method.is_empty() {
            return Err(RpcError::Configuration(
                "rpc method name must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            method: method.to_owned(),
            params,
            jsonrpc: jsonrpc.to_owned(),
            id,
        })
    }
}
