//! # docchat-stream
//!
//! Streaming consumer for a document-grounded chat backend.
//!
//! A conversation plus a set of document identifiers goes in; the assistant's
//! reply comes back as an ordered, lazily produced sequence of text fragments.
//!
//! ## Features
//!
//! - **Chunk-agnostic framing**: lines are reassembled however the network splits bytes
//! - **Tolerant payloads**: SSE `data:` frames with JSON strings, JSON objects
//!   (`content` / `text` / `message`) or opaque text, plus plain-text lines
//! - **Never throws**: transport failures end the reply with one diagnostic fragment
//! - **Offline simulation**: a deterministic paced reply while no backend is configured
//!
//! ## Example
//!
//! ```rust,no_run
//! use docchat_stream::{BackendConfig, ChatStreamer, ReplyEvent};
//! use docchat_types::ChatMessage;
//!
//! #[tokio::main]
//! async fn main() {
//!     let streamer = ChatStreamer::new(BackendConfig::from_env());
//!     let messages = vec![ChatMessage::user("What does the contract say about renewal?")];
//!     let mut reply = streamer.chat_completion(&messages, &["contract.pdf".to_string()]);
//!
//!     loop {
//!         match reply.next_event().await {
//!             ReplyEvent::Delta(text) | ReplyEvent::ErrorDelta(text) => print!("{}", text),
//!             ReplyEvent::Done => break,
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod consumer;
pub mod decoder;
pub mod error;
pub mod fallback;
pub mod payload;

// Re-export commonly used types
pub use client::{
    ByteStream,
    ChatTransport,
    HttpTransport,
};

pub use config::{
    BackendConfig,
    DEFAULT_FALLBACK_DELAY,
};

pub use consumer::{
    ChatStreamer,
    ReplyEvent,
    ReplyStream,
};

pub use decoder::LineDecoder;
pub use error::TransportError;
pub use fallback::FallbackSimulator;
pub use payload::{interpret_line, LineOutcome, Payload};
