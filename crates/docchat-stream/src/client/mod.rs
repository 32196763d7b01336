use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use docchat_types::CompletionRequest;
use crate::error::TransportError;

pub mod http;

pub use http::HttpTransport;

/// Response body as raw chunks, in arrival order
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, TransportError>> + Send>>;

/// Transport seam - issues exactly one request per call, never retries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send the request and hand back the body once a success status arrived
    async fn open(&self, request: &CompletionRequest) -> Result<ByteStream, TransportError>;

    /// Where requests go, for diagnostics
    fn endpoint(&self) -> String;
}
