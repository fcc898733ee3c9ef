use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RpcError;

/// Successful JSON-RPC response.
///
/// Only built from bodies whose `error` member is absent or null, so holding
/// an `RpcResponse` means the daemon accepted the call.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    result: Value,
    id: Value,
}

impl RpcResponse {
    /// Wrap a decoded response body, surfacing a non-null `error` member as
    /// [`RpcError::Daemon`].
    pub fn from_body(body: Value) -> Result<Self, RpcError> {
        let mut map = match body {
            Value::Object(map) => map,
            other => {
                return Err(RpcError::transport(
                    format!("expected a JSON-RPC response object, got: {other}"),
                    0,
                ))
            }
        };

        match map.remove("error") {
            None | Some(Value::Null) => {}
            Some(err) => return Err(parse_jsonrpc_error(err)),
        }

        Ok(Self {
            result: map.remove("result").unwrap_or(Value::Null),
            id: map.remove("id").unwrap_or(Value::Null),
        })
    }

    /// The whole `result` payload.
    pub fn get(&self) -> &Value {
        &self.result
    }

    /// Correlation id echoed by the daemon.
    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn into_result(self) -> Value {
        self.result
    }

    /// Look up a value inside the result by dot-separated path, e.g.
    /// `"softforks.taproot.active"` or `"vout.0.value"`. An empty path
    /// addresses the whole result.
    pub fn key(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.result);
        }

        path.split('.')
            .try_fold(&self.result, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// Whether `path` resolves, even to `null`.
    pub fn exists(&self, path: &str) -> bool {
        self.key(path).is_some()
    }

    /// Whether `path` resolves to a non-null value.
    pub fn has(&self, path: &str) -> bool {
        self.key(path).is_some_and(|value| !value.is_null())
    }

    /// Number of elements of the array or object at `path`; 0 for scalars and
    /// missing paths.
    pub fn count(&self, path: &str) -> usize {
        match self.key(path) {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(map)) => map.len(),
            _ => 0,
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.result.as_array().and_then(|items| items.first())
    }

    pub fn last(&self) -> Option<&Value> {
        self.result.as_array().and_then(|items| items.last())
    }

    /// Decode the result into a typed structure.
    pub fn deserialize<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.result)
    }
}

/// Turn a JSON-RPC `error` member into [`RpcError::Daemon`].
///
/// The standard shape is `{"code": <int>, "message": <string>}`. A missing or
/// non-integer code becomes 0; a missing message falls back to the raw JSON.
pub(crate) fn parse_jsonrpc_error(err: Value) -> RpcError {
    match err {
        Value::Object(map) => {
            let code = map.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned);
            let message = message.unwrap_or_else(|| Value::Object(map).to_string());
            RpcError::daemon(message, code)
        }
        Value::String(message) => RpcError::daemon(message, 0),
        other => RpcError::daemon(other.to_string(), 0),
    }
}
