use async_trait::async_trait;
use futures::StreamExt;

use docchat_logging::{log_backend_error, log_request};
use docchat_types::CompletionRequest;
use crate::client::{ByteStream, ChatTransport};
use crate::error::TransportError;

/// reqwest-backed transport posting to the backend chat endpoint
pub struct HttpTransport {
    endpoint: String,
    verbose: bool,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(endpoint: String, verbose: bool) -> Self {
        Self {
            endpoint,
            verbose,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(endpoint: String, verbose: bool, client: reqwest::Client) -> Self {
        Self {
            endpoint,
            verbose,
            client,
        }
    }
}

/// Build the error for a non-success reply; an unreadable or empty body is
/// replaced by the status reason phrase
pub(crate) fn status_error(status: reqwest::StatusCode, body: Option<String>) -> TransportError {
    let body = match body {
        Some(text) if !text.trim().is_empty() => text,
        _ => status.canonical_reason().unwrap_or("Unknown").to_string(),
    };
    TransportError::Status {
        status: status.as_u16(),
        body,
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn open(&self, request: &CompletionRequest) -> Result<ByteStream, TransportError> {
        log_request(&self.endpoint, request, self.verbose);

        let body = serde_json::to_vec(request)?;

        let response = self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error = status_error(status, response.text().await.ok());
            if let TransportError::Status { body, .. } = &error {
                log_backend_error(&self.endpoint, &status, body, self.verbose);
            }
            return Err(error);
        }

        let byte_stream = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| TransportError::Read(e.to_string()))
            });

        Ok(Box::pin(byte_stream))
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}
