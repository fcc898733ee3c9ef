pub mod amount;
pub mod error;
pub mod rpc;

pub use error::{ErrorEnvelope, RpcError};
pub use rpc::{ClientConfig, PendingCall, RpcClient, RpcResponse};
