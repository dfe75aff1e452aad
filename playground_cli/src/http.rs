//! HTTP transport backed by a blocking `ureq` agent.

use std::time::Duration;

use compiler_api::{ActionRequest, ActionResponse, CompilerTransport, TransportError};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking JSON-over-HTTP transport for the compiler service
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given server base URL
    ///
    /// A trailing slash on the base URL is dropped so endpoint paths can be
    /// appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with an explicit per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, base_url }
    }

    /// The server base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CompilerTransport for HttpTransport {
    fn perform(&mut self, request: &ActionRequest) -> Result<ActionResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path());
        let body = request.to_json()?;

        match self
            .agent
            .post(&url)
            .set("Content-Type", compiler_api::CONTENT_TYPE)
            .send_string(&body)
        {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                ActionResponse::from_json(request.action(), &text)
            }
            Err(ureq::Error::Status(status, response)) => Err(TransportError::Http {
                status,
                reason: response.status_text().to_string(),
            }),
            Err(err) => Err(TransportError::Network(err.to_string())),
        }
    }
}
