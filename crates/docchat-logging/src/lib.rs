// Logging module - verbose request and stream debugging
pub mod request_logger;

// Re-export request logging functions
pub use request_logger::{
    format_backend_error,
    format_stream_line,
    log_backend_error,
    log_request,
    log_stream_line,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}
