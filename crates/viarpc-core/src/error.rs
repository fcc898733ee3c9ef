use std::fmt;

/// Message and code surfaced to callers for daemon and transport failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub message: String,
    pub code: i64,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RpcError {
    /// The connection string or option map could not be turned into a client.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The daemon processed the call and answered with a JSON-RPC error object.
    #[error("daemon error: {0}")]
    Daemon(ErrorEnvelope),

    /// The exchange failed below the JSON-RPC layer.
    #[error("transport error: {0}")]
    Transport(ErrorEnvelope),
}

impl RpcError {
    pub(crate) fn daemon(message: impl Into<String>, code: i64) -> Self {
        Self::Daemon(ErrorEnvelope::new(message, code))
    }

    pub(crate) fn transport(message: impl Into<String>, code: i64) -> Self {
        Self::Transport(ErrorEnvelope::new(message, code))
    }

    /// Daemon or HTTP status code; `0` for configuration errors and for
    /// failures where no response was received.
    pub fn code(&self) -> i64 {
        match self {
            Self::Configuration(_) => 0,
            Self::Daemon(envelope) | Self::Transport(envelope) => envelope.code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(message) => message,
            Self::Daemon(envelope) | Self::Transport(envelope) => &envelope.message,
        }
    }

    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Configuration(_) => None,
            Self::Daemon(envelope) | Self::Transport(envelope) => Some(envelope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_envelope_fields() {
        let err = RpcError::daemon("No information available about transaction", -5);
        assert_eq!(err.code(), -5);
        assert_eq!(err.message(), "No information available about transaction");
        assert_eq!(
            err.to_string(),
            "daemon error: No information available about transaction (code -5)"
        );
    }

    #[test]
    fn configuration_error_has_no_envelope() {
        let err = RpcError::Configuration("invalid url".into());
        assert_eq!(err.code(), 0);
        assert_eq!(err.message(), "invalid url");
        assert!(err.envelope().is_none());
    }
}
