use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docchat
#[derive(Parser, Debug)]
#[command(name = "docchat")]
#[command(about = "DocChat - streamed answers grounded on your documents")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Message to send; without it docchat starts in interactive mode
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Run in interactive mode (default when no message is given)
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub interactive: bool,

    /// Backend base URL, e.g. https://rag.example.com (requests go to <URL>/api/chat).
    /// Falls back to NEXT_PUBLIC_BACKEND_API_URL, then BACKEND_API_URL
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Document identifier to ground the answer on (repeatable)
    #[arg(short, long = "doc", value_name = "ID")]
    pub docs: Vec<String>,

    /// JSON file holding the prior conversation as [{"role": ..., "content": ...}]
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Milliseconds between simulated tokens when no backend is configured
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub delay_ms: u64,

    /// Print HTTP request and stream debugging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_invocation() {
        let cli = Cli::try_parse_from([
            "docchat",
            "--backend-url",
            "http://rag:9000",
            "--doc",
            "a.pdf",
            "-d",
            "b.md",
            "Summarize both",
        ])
        .unwrap();

        assert_eq!(cli.message.as_deref(), Some("Summarize both"));
        assert_eq!(cli.backend_url.as_deref(), Some("http://rag:9000"));
        assert_eq!(cli.docs, vec!["a.pdf", "b.md"]);
        assert_eq!(cli.delay_ms, 50);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["docchat"]).unwrap();
        assert!(cli.message.is_none());
        assert!(cli.docs.is_empty());
        assert!(cli.history.is_none());
        assert!(!cli.verbose);
    }
}
