use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, HttpTransport, TransportFailure};

/// A mock transport for testing. Replays canned outcomes in order and
/// records every request it receives.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportFailure>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            outcomes: VecDeque::new(),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Body of the most recent request, decoded as JSON.
    pub fn last_body(&self) -> Option<serde_json::Value> {
        let requests = self.requests.lock().unwrap();
        let last = requests.last()?;
        serde_json::from_str(&last.body).ok()
    }
}

pub struct MockTransportBuilder {
    outcomes: VecDeque<Result<HttpResponse, TransportFailure>>,
}

impl MockTransportBuilder {
    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.outcomes.push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_response(status, body.to_string())
    }

    pub fn with_failure(mut self, message: &str) -> Self {
        self.outcomes.push_back(Err(TransportFailure::new(message)));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            outcomes: Mutex::new(self.outcomes),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure::new("mock transport has no outcome left")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            url: "http://127.0.0.1:8332/".parse().unwrap(),
            body: r#"{"method":"getblockcount"}"#.into(),
            auth: (String::new(), String::new()),
        }
    }

    #[tokio::test]
    async fn replays_outcomes_in_order_then_fails() {
        let mock = MockTransport::builder()
            .with_response(200, "first")
            .with_failure("second")
            .build();

        assert_eq!(mock.post(request()).await.unwrap().body, "first");
        assert_eq!(mock.post(request()).await.unwrap_err().message, "second");
        assert!(mock.post(request()).await.is_err());
        assert_eq!(mock.requests().len(), 3);
        assert_eq!(
            mock.last_body().unwrap()["method"],
            serde_json::json!("getblockcount")
        );
    }
}
