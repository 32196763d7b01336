use thiserror::Error;

/// Failures raised while talking to the chat backend.
///
/// None of these reach the caller of [`crate::ChatStreamer`]; they are turned
/// into a single diagnostic delta at the consumer boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend answered with a non-success status
    #[error("Backend API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Connection could not be established or the request failed to send
    #[error("Failed to reach backend: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body broke off while being read
    #[error("Error reading stream: {0}")]
    Read(String),

    /// The request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TransportError {
    /// HTTP status carried by the error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
