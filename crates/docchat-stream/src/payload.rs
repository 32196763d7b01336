//! Classification of a single stream line.
//!
//! A line is one of: blank, an SSE comment, an SSE `data: ` frame, or plain
//! text. `data: ` frames carry either JSON (a bare string, or an object with
//! the text under `content`, `text` or `message`) or opaque text.

use serde_json::Value;

/// SSE data prefix, including the mandatory space
pub const DATA_PREFIX: &str = "data: ";

/// Sentinel payload that ends the stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// Keys checked on a structured payload, highest priority first
pub const TEXT_KEYS: [&str; 3] = ["content", "text", "message"];

/// Result of interpreting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Reply text to hand to the caller
    Delta(String),
    /// Nothing to emit for this line
    Skip,
    /// Stop reading; nothing after this line is interpreted
    Done,
}

impl LineOutcome {
    /// Short name used in stream logs
    pub fn kind(&self) -> &'static str {
        match self {
            LineOutcome::Delta(_) => "delta",
            LineOutcome::Skip => "skip",
            LineOutcome::Done => "done",
        }
    }

    pub fn delta(&self) -> Option<&str> {
        match self {
            LineOutcome::Delta(text) => Some(text),
            _ => None,
        }
    }
}

/// Payload of a `data: ` frame after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Structured(Value),
    Opaque(String),
}

impl Payload {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Payload::Structured(value),
            Err(_) => Payload::Opaque(text.to_string()),
        }
    }

    /// Text carried by the payload, if any
    pub fn into_delta(self) -> Option<String> {
        match self {
            Payload::Structured(Value::String(s)) => Some(s),
            Payload::Structured(Value::Object(map)) => TEXT_KEYS
                .iter()
                .filter_map(|key| map.get(*key))
                .find_map(text_of),
            // Parsed fine but carries no recognizable text
            Payload::Structured(_) => None,
            Payload::Opaque(text) => {
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }
}

// Falsy values (null, false, 0, "") count as absent so the next key gets a chance.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Classify a single line
pub fn interpret_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Skip;
    }

    if line.starts_with(':') {
        return LineOutcome::Skip;
    }

    if let Some(rest) = line.strip_prefix(DATA_PREFIX) {
        let payload = rest.trim();
        if payload == DONE_SENTINEL {
            return LineOutcome::Done;
        }
        return match Payload::parse(payload).into_delta() {
            Some(delta) => LineOutcome::Delta(delta),
            None => LineOutcome::Skip,
        };
    }

    LineOutcome::Delta(line.to_string())
}
