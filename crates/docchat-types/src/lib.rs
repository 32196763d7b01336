//! Core types and structures for docchat
//!
//! This crate provides the conversation and request types shared by the
//! streaming core and the command line front-end.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Placeholder backend URL; a backend left at this value counts as unconfigured
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8000";

/// Path of the chat completion endpoint, relative to the backend base URL
pub const CHAT_ENDPOINT_PATH: &str = "/api/chat";

/// Environment variables consulted for the backend URL, in priority order
pub const BACKEND_URL_ENV_VARS: [&str; 2] = ["NEXT_PUBLIC_BACKEND_API_URL", "BACKEND_API_URL"];

// ============================================================================
// Message Types
// ============================================================================

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Returns the content of the most recent user message, if any
pub fn last_user_message(messages: &[ChatMessage]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
}

// ============================================================================
// Request Types
// ============================================================================

/// Body of the chat completion POST.
///
/// Built once per call and never mutated afterwards; `stream` is always true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    messages: Vec<ChatMessage>,
    document_ids: Vec<String>,
    stream: bool,
}

impl CompletionRequest {
    /// Document identifiers keep caller order; repeats are dropped.
    pub fn new(messages: Vec<ChatMessage>, document_ids: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(document_ids.len());
        for id in document_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self {
            messages,
            document_ids: unique,
            stream: true,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn document_ids(&self) -> &[String] {
        &self.document_ids
    }

    pub fn is_stream(&self) -> bool {
        self.stream
    }
}
