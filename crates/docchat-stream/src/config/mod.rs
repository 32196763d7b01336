use std::env;
use std::time::Duration;

use docchat_types::{BACKEND_URL_ENV_VARS, CHAT_ENDPOINT_PATH, DEFAULT_BACKEND_API_URL};

/// Default pause before each simulated token
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(50);

/// Backend settings read once per process and consulted once per call
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub verbose: bool,
    pub fallback_delay: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_API_URL.to_string(),
            verbose: false,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Build from `NEXT_PUBLIC_BACKEND_API_URL`, then `BACKEND_API_URL`,
    /// falling back to the placeholder URL. Empty values are ignored.
    pub fn from_env() -> Self {
        let base_url = BACKEND_URL_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    /// False while the base URL is blank or still the placeholder
    pub fn is_configured(&self) -> bool {
        let url = self.base_url.trim();
        !url.is_empty() && url != DEFAULT_BACKEND_API_URL
    }

    /// Full URL of the chat completion endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim().trim_end_matches('/'), CHAT_ENDPOINT_PATH)
    }
}
