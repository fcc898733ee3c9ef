//! Daemon JSON-RPC layer.
//!
//! Defines the [`HttpTransport`] seam the client talks through, the
//! [`RpcClient`] that builds requests and maps outcomes, and the
//! [`RpcResponse`] / [`PendingCall`] values handed back to callers.

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod pending;
pub mod response;
pub mod types;

pub use http_adapter::{
    map_outcome, ClientConfig, HttpOutcome, ReqwestTransport, RpcClient, RpcRequest, Scheme,
    DEFAULT_PORT,
};
pub use pending::PendingCall;
pub use response::RpcResponse;
pub use types::{BlockHeader, ChainInfo};

use async_trait::async_trait;
use reqwest::Url;

/// One outbound JSON-RPC POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    /// Serialized JSON-RPC request object.
    pub body: String,
    /// Basic auth `(user, password)`; empty strings when unset.
    pub auth: (String, String),
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange failed before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// HTTP transport used by [`RpcClient`].
///
/// Implementations own connection management, TLS and timeouts. Any response
/// that arrives, whatever its status, must be returned as `Ok` so that the
/// client can inspect the body for a daemon error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}
