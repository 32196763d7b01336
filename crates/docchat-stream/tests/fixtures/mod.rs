#![allow(dead_code)]

use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::{stream, Stream};
use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use docchat_stream::{ByteStream, ChatTransport, TransportError};
use docchat_types::CompletionRequest;

/// Mock chat backend for exercising the HTTP transport
pub struct BackendMockServer {
    server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests the server has seen so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Mock a successful streamed reply with the given raw body
    pub async fn mock_stream(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({ "stream": true })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/event-stream"))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a reply that only matches the exact request body
    pub async fn mock_stream_for(&self, request: serde_json::Value, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(request))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/event-stream"))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a non-success status with a plain-text body
    pub async fn mock_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// Transport replaying a fixed list of chunks, counting how often it was opened
/// and recording when the body it handed out is released
pub struct ScriptedTransport {
    chunks: Vec<Vec<u8>>,
    read_error: Option<String>,
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicBool>,
}

impl ScriptedTransport {
    pub fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks,
            read_error: None,
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Split `body` into pieces of `size` bytes, ignoring character boundaries
    pub fn chunked(body: &[u8], size: usize) -> Self {
        Self::new(body.chunks(size).map(|c| c.to_vec()).collect())
    }

    /// Fail the read after the scripted chunks instead of ending cleanly
    pub fn with_read_error(mut self, message: &str) -> Self {
        self.read_error = Some(message.to_string());
        self
    }

    pub fn open_count(&self) -> Arc<AtomicUsize> {
        self.opened.clone()
    }

    /// Set once the last opened body has been dropped
    pub fn release_flag(&self) -> Arc<AtomicBool> {
        self.released.clone()
    }
}

/// Body wrapper that raises a flag when it is dropped
struct TrackedBody {
    inner: ByteStream,
    released: Arc<AtomicBool>,
}

impl Stream for TrackedBody {
    type Item = Result<Vec<u8>, TransportError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn open(&self, _request: &CompletionRequest) -> Result<ByteStream, TransportError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.released.store(false, Ordering::SeqCst);

        let mut items: Vec<Result<Vec<u8>, TransportError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        if let Some(message) = &self.read_error {
            items.push(Err(TransportError::Read(message.clone())));
            // Anything after the failure must never be read
            items.push(Ok(b"data: unreachable\n".to_vec()));
        }

        let body: ByteStream = Box::pin(TrackedBody {
            inner: Box::pin(stream::iter(items)),
            released: self.released.clone(),
        });
        Ok(body)
    }

    fn endpoint(&self) -> String {
        "scripted://backend/api/chat".to_string()
    }
}

/// Stream bodies used across tests
pub mod bodies {
    pub const SENTINEL_STOP: &str = "data: hello\n\ndata: [DONE]\n\ndata: world\n\n";

    pub const PLAIN_TEXT: &str = "Hello\nWorld\n";

    /// Every accepted payload shape in one stream
    pub const MIXED: &str = concat!(
        ": connected\n",
        "\n",
        "data: \"Grüße\"\n",
        "\n",
        "data: {\"content\":\", wörld\"}\n",
        "data: {\"text\":\" ✓ \"}\n",
        "data: {\"message\":\"日本語\"}\n",
        "data: {\"other\":\"ignored\"}\n",
        "data: opaque 🚀\n",
        "plain line\n",
        "data: {\"content\":\"tail\"}",
    );
}
