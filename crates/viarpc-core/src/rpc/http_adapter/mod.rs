//! JSON-RPC over HTTP for viacoind-compatible endpoints.
//!
//! Parses connection strings into a [`ClientConfig`], serializes calls,
//! maps HTTP outcomes onto [`RpcError`](crate::error::RpcError) kinds and
//! ships the default `reqwest` transport.

mod client;
mod connection;
mod errors;
mod methods;
mod protocol;
mod transport;

pub use client::RpcClient;
pub use connection::{ClientConfig, Scheme, DEFAULT_PORT};
pub use errors::{map_outcome, HttpOutcome};
pub use protocol::RpcRequest;
pub use transport::ReqwestTransport;
