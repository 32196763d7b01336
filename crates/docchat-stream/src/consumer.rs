use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_stream::stream;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

use docchat_logging::log_stream_line;
use docchat_types::{ChatMessage, CompletionRequest};
use crate::client::{ChatTransport, HttpTransport};
use crate::config::BackendConfig;
use crate::decoder::LineDecoder;
use crate::error::TransportError;
use crate::fallback::FallbackSimulator;
use crate::payload::{interpret_line, LineOutcome};

/// What the caller receives on each pull.
///
/// After `ErrorDelta` the stream is over; every later pull yields `Done`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    /// Next fragment of the reply
    Delta(String),
    /// Human-readable description of a transport failure; always the last fragment
    ErrorDelta(String),
    /// Nothing more will be produced
    Done,
}

impl ReplyEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ErrorDelta(_) | Self::Done)
    }

    /// Fragment text; error text reads like any other fragment
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Delta(text) | Self::ErrorDelta(text) => Some(text),
            Self::Done => None,
        }
    }
}

/// Lazy reply for one call.
///
/// Nothing is sent to the backend until the first pull. Dropping the stream
/// drops the open response body with it.
pub struct ReplyStream {
    inner: BoxStream<'static, ReplyEvent>,
    finished: bool,
}

impl ReplyStream {
    fn new(events: impl Stream<Item = ReplyEvent> + Send + 'static) -> Self {
        Self {
            inner: events.boxed(),
            finished: false,
        }
    }

    /// Wait for the next fragment, an error fragment, or the end
    pub async fn next_event(&mut self) -> ReplyEvent {
        if self.finished {
            return ReplyEvent::Done;
        }
        match self.inner.next().await {
            Some(event) => event,
            None => {
                self.finished = true;
                ReplyEvent::Done
            }
        }
    }

    /// Drain the stream into the full reply text
    pub async fn collect_text(mut self) -> String {
        let mut reply = String::new();
        while let Some(text) = self.next_event().await.into_text() {
            reply.push_str(&text);
        }
        reply
    }
}

impl Stream for ReplyStream {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }
        match this.inner.poll_next_unpin(cx) {
            Poll::Ready(Some(event)) => Poll::Ready(event.into_text()),
            Poll::Ready(None) => {
                this.finished = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Entry point: turns a conversation into a streamed reply.
///
/// Holds no per-call state, so one streamer can serve concurrent calls.
pub struct ChatStreamer {
    config: BackendConfig,
    transport: Arc<dyn ChatTransport>,
}

impl ChatStreamer {
    /// Streamer talking HTTP to `config.endpoint()`
    pub fn new(config: BackendConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(config.endpoint(), config.verbose));
        Self { config, transport }
    }

    pub fn with_transport(config: BackendConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Stream the assistant's reply to `messages`, grounded on `document_ids`.
    ///
    /// Never fails: transport problems become one trailing diagnostic fragment.
    pub fn chat_completion(&self, messages: &[ChatMessage], document_ids: &[String]) -> ReplyStream {
        let request = CompletionRequest::new(messages.to_vec(), document_ids.to_vec());

        if !self.config.is_configured() {
            log::warn!("Backend API URL not configured. Using simulated response.");
            let simulator = FallbackSimulator::new(self.config.fallback_delay);
            let deltas = simulator.stream(request.messages(), request.document_ids().len());
            return ReplyStream::new(deltas.map(ReplyEvent::Delta));
        }

        log::debug!(
            "Streaming chat completion from {} ({} messages, {} documents)",
            self.transport.endpoint(),
            request.messages().len(),
            request.document_ids().len()
        );

        ReplyStream::new(live_events(
            self.transport.clone(),
            request,
            self.config.base_url.clone(),
            self.config.verbose,
        ))
    }
}

fn diagnostic(error: &TransportError, base_url: &str) -> ReplyEvent {
    log::error!("Chat completion error: {}", error);
    ReplyEvent::ErrorDelta(format!(
        "Error: {}. Please check that the backend is running at {}",
        error, base_url
    ))
}

fn live_events(
    transport: Arc<dyn ChatTransport>,
    request: CompletionRequest,
    base_url: String,
    verbose: bool,
) -> impl Stream<Item = ReplyEvent> + Send + 'static {
    stream! {
        match transport.open(&request).await {
            Err(e) => {
                yield diagnostic(&e, &base_url);
            }
            Ok(mut body) => {
                let mut decoder = LineDecoder::new();
                let mut line_count = 0usize;
                let mut stopped = false;

                'read: while let Some(chunk) = body.next().await {
                    let bytes = match chunk {
                        Ok(bytes) => bytes,
                        Err(e) => {
                            yield diagnostic(&e, &base_url);
                            stopped = true;
                            break 'read;
                        }
                    };

                    for line in decoder.push(&bytes) {
                        line_count += 1;
                        let outcome = interpret_line(&line);
                        log_stream_line(line_count, &line, outcome.kind(), outcome.delta(), verbose);

                        match outcome {
                            LineOutcome::Delta(delta) => {
                                yield ReplyEvent::Delta(delta);
                            }
                            LineOutcome::Skip => {}
                            LineOutcome::Done => {
                                log::debug!("Stream completed after {} lines", line_count);
                                stopped = true;
                                break 'read;
                            }
                        }
                    }
                }

                if !stopped {
                    if let Some(line) = decoder.finish() {
                        let outcome = interpret_line(&line);
                        log_stream_line(line_count + 1, &line, outcome.kind(), outcome.delta(), verbose);
                        if let LineOutcome::Delta(delta) = outcome {
                            yield ReplyEvent::Delta(delta);
                        }
                    }
                }
            }
        }
    }
}
