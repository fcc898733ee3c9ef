use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::trace;

use crate::error::RpcError;

use super::super::{HttpRequest, HttpResponse, HttpTransport, TransportFailure};
use super::connection::ClientConfig;

/// Default [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client for `config`. When `config.ca` is set, only that PEM
    /// certificate is trusted for TLS.
    pub fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true);

        if let Some(ca) = config.verify() {
            let pem = std::fs::read(ca).map_err(|e| {
                RpcError::Configuration(format!(
                    "failed to read CA certificate {}: {e}",
                    ca.display()
                ))
            })?;
            let certificate = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                RpcError::Configuration(format!(
                    "invalid CA certificate {}: {e}",
                    ca.display()
                ))
            })?;
            builder = builder
                .tls_built_in_root_certs(false)
                .add_root_certificate(certificate);
        }

        let client = builder
            .build()
            .map_err(|e| RpcError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let (user, pass) = request.auth;
        trace!(url = %request.url, body = %request.body, "http post");

        let response = self
            .client
            .post(request.url)
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(user, Some(pass))
            .body(request.body)
            .send()
            .await
            .map_err(|e| TransportFailure::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure::new(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
