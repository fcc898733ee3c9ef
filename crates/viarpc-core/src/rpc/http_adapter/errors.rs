use serde_json::Value;

use crate::error::RpcError;

use super::super::response::{parse_jsonrpc_error, RpcResponse};
use super::super::{HttpResponse, TransportFailure};

/// Message used when a failed HTTP response carries no body.
const EMPTY_BODY_PLACEHOLDER: &str = "n/a";

/// Result of one HTTP exchange as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    /// A response arrived, whatever its status.
    Response(HttpResponse),
    /// Nothing came back (refused connection, timeout, TLS failure).
    Failed(TransportFailure),
}

impl From<Result<HttpResponse, TransportFailure>> for HttpOutcome {
    fn from(result: Result<HttpResponse, TransportFailure>) -> Self {
        match result {
            Ok(response) => Self::Response(response),
            Err(failure) => Self::Failed(failure),
        }
    }
}

/// Classify an HTTP outcome into a response or an [`RpcError`].
///
/// A JSON-RPC `error` object wins over the HTTP status: daemons report
/// failures with both 200 and 500. Otherwise non-2xx statuses and missing
/// responses are transport errors, and a 2xx body is unwrapped.
pub fn map_outcome(outcome: HttpOutcome) -> Result<RpcResponse, RpcError> {
    let response = match outcome {
        HttpOutcome::Failed(failure) => return Err(RpcError::transport(failure.message, 0)),
        HttpOutcome::Response(response) => response,
    };
    let status = i64::from(response.status);
    let decoded = serde_json::from_str::<Value>(&response.body);

    if let Ok(Value::Object(map)) = &decoded {
        if let Some(err) = map.get("error").filter(|err| !err.is_null()) {
            return Err(parse_jsonrpc_error(err.clone()));
        }
    }

    if !response.is_success() {
        let message = if response.body.trim().is_empty() {
            EMPTY_BODY_PLACEHOLDER.to_owned()
        } else {
            response.body
        };
        return Err(RpcError::transport(message, status));
    }

    match decoded {
        Ok(body @ Value::Object(_)) => RpcResponse::from_body(body),
        Ok(other) => Err(RpcError::transport(
            format!("expected a JSON-RPC response object, got: {other}"),
            status,
        )),
        Err(e) => Err(RpcError::transport(
            format!("decode JSON-RPC response: {e}; body={}", response.body),
            status,
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, body: Value) -> HttpOutcome {
        HttpOutcome::Response(HttpResponse::new(status, body.to_string()))
    }

    fn daemon_error_body() -> Value {
        json!({
            "result": null,
            "error": {"code": -5, "message": "No information available about transaction"},
            "id": 0
        })
    }

    #[test]
    fn success_body_passes_result_through() {
        let mapped = map_outcome(response(200, json!({"result": {"height": 1}, "error": null})))
            .expect("must succeed");
        assert_eq!(mapped.get(), &json!({"height": 1}));
    }

    #[test]
    fn daemon_error_wins_regardless_of_status() {
        for status in [200, 500] {
            let err = map_outcome(response(status, daemon_error_body())).expect_err("must fail");
            assert!(matches!(err, RpcError::Daemon(_)), "status {status}");
            assert_eq!(err.code(), -5);
            assert_eq!(err.message(), "No information available about transaction");
        }
    }

    #[test]
    fn empty_error_response_uses_placeholder_and_status() {
        let err = map_outcome(HttpOutcome::Response(HttpResponse::new(500, "")))
            .expect_err("must fail");
        assert!(matches!(err, RpcError::Transport(_)));
        assert_eq!(err.code(), 500);
        assert_eq!(err.message(), "n/a");
    }

    #[test]
    fn non_json_error_response_keeps_raw_body() {
        let err = map_outcome(HttpOutcome::Response(HttpResponse::new(401, "Unauthorized")))
            .expect_err("must fail");
        assert!(matches!(err, RpcError::Transport(_)));
        assert_eq!(err.code(), 401);
        assert_eq!(err.message(), "Unauthorized");
    }

    #[test]
    fn error_status_with_null_error_is_transport() {
        let err = map_outcome(response(503, json!({"result": null, "error": null})))
            .expect_err("must fail");
        assert!(matches!(err, RpcError::Transport(_)));
        assert_eq!(err.code(), 503);
    }

    #[test]
    fn missing_response_is_transport_with_code_zero() {
        let err = map_outcome(HttpOutcome::Failed(TransportFailure::new("test")))
            .expect_err("must fail");
        assert!(matches!(err, RpcError::Transport(_)));
        assert_eq!(err.code(), 0);
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn undecodable_success_body_is_transport() {
        let err = map_outcome(HttpOutcome::Response(HttpResponse::new(200, "<html>")))
            .expect_err("must fail");
        assert!(matches!(err, RpcError::Transport(_)));
        assert_eq!(err.code(), 200);
        assert!(err.message().starts_with("decode JSON-RPC response"));
    }

    #[test]
    fn outcome_from_transport_result() {
        let outcome: HttpOutcome = Err(TransportFailure::new("refused")).into();
        assert_eq!(outcome, HttpOutcome::Failed(TransportFailure::new("refused")));
    }
}
