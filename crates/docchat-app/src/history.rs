use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use docchat_types::ChatMessage;

/// Load a prior conversation saved as a JSON array of messages
pub fn load_history(path: &Path) -> Result<Vec<ChatMessage>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;

    let messages: Vec<ChatMessage> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file {}", path.display()))?;

    Ok(messages)
}

/// Split a `/docs` argument like "a.pdf, b.md" into identifiers
pub fn parse_document_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
