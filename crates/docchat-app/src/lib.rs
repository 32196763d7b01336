//! DocChat Application Library
//!
//! Command line front-end over the streaming chat core.

pub use docchat_types::{self as types, ChatMessage, Role};
pub use docchat_stream::{self as stream, BackendConfig, ChatStreamer, ReplyEvent};

pub mod app;
pub mod cli;
pub mod history;

pub use cli::Cli;
pub use history::{load_history, parse_document_list};
