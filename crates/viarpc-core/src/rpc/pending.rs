use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::RpcError;

use super::response::RpcResponse;

type Completion<T> = Box<dyn FnOnce(&T) + Send + 'static>;

/// Handle to an in-flight JSON-RPC call.
///
/// Nothing is sent until the handle is polled. Awaiting it yields the same
/// `Result` a blocking request would; callbacks registered with
/// [`on_success`](Self::on_success) and [`on_failure`](Self::on_failure)
/// run once, on the task that polls the handle, right before it resolves.
#[must_use = "a PendingCall does nothing unless awaited"]
pub struct PendingCall {
    exchange: BoxFuture<'static, Result<RpcResponse, RpcError>>,
    on_success: Option<Completion<RpcResponse>>,
    on_failure: Option<Completion<RpcError>>,
}

impl PendingCall {
    pub(crate) fn new<F>(exchange: F) -> Self
    where
        F: Future<Output = Result<RpcResponse, RpcError>> + Send + 'static,
    {
        Self {
            exchange: exchange.boxed(),
            on_success: None,
            on_failure: None,
        }
    }

    /// A call that failed before anything was sent.
    pub(crate) fn failed(err: RpcError) -> Self {
        Self::new(futures::future::ready(Err(err)))
    }

    pub fn on_success(mut self, callback: impl FnOnce(&RpcResponse) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_failure(mut self, callback: impl FnOnce(&RpcError) + Send + 'static) -> Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    /// Drive the call to completion without surfacing its failure; the
    /// registered callbacks still run.
    pub async fn settle(self) {
        let _ = self.await;
    }
}

impl Future for PendingCall {
    type Output = Result<RpcResponse, RpcError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = ready!(self.exchange.poll_unpin(cx));

        let on_success = self.on_success.take();
        let on_failure = self.on_failure.take();
        match &outcome {
            Ok(response) => {
                if let Some(callback) = on_success {
                    callback(response);
                }
            }
            Err(err) => {
                if let Some(callback) = on_failure {
                    callback(err);
                }
            }
        }

        Poll::Ready(outcome)
    }
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall")
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish_non_exhaustive()
    }
}
