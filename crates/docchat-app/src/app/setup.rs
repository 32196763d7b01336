use anyhow::Result;
use std::time::Duration;

use docchat_stream::BackendConfig;
use docchat_types::ChatMessage;
use crate::cli::Cli;
use crate::history::load_history;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub history: Vec<ChatMessage>,
    pub documents: Vec<String>,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    // Precedence: CLI flag > NEXT_PUBLIC_BACKEND_API_URL > BACKEND_API_URL > placeholder
    let backend = match cli.backend_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => BackendConfig::new(url),
        _ => BackendConfig::from_env(),
    }
    .with_verbose(cli.verbose)
    .with_fallback_delay(Duration::from_millis(cli.delay_ms));

    let history = match &cli.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    Ok(AppConfig {
        backend,
        history,
        documents: cli.docs.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_backend_url_wins() {
        let cli = Cli::try_parse_from(["docchat", "--backend-url", "http://rag:9000", "--delay-ms", "0", "-v"]).unwrap();
        let config = setup_from_cli(&cli).unwrap();

        assert_eq!(config.backend.base_url, "http://rag:9000");
        assert!(config.backend.is_configured());
        assert!(config.backend.verbose);
        assert_eq!(config.backend.fallback_delay, Duration::ZERO);
        assert!(config.history.is_empty());
    }

    #[test]
    fn test_missing_history_file_is_an_error() {
        let cli = Cli::try_parse_from(["docchat", "--history", "/nonexistent/history.json"]).unwrap();
        assert!(setup_from_cli(&cli).is_err());
    }
}
