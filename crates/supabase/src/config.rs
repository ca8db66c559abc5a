use std::time::Duration;

use lifeguide_core::errors::{Error, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings of a Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    /// Anon key for clients, service-role key for trusted servers.
    pub api_key: String,
    pub request_timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `LG_REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_key("SUPABASE_ANON_KEY")
    }

    /// Like [`SupabaseConfig::from_env`] with the API key read from `key_var`.
    pub fn from_env_with_key(key_var: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let url = required_var("SUPABASE_URL")?;
        let api_key = required_var(key_var)?;
        let timeout_ms: u64 = std::env::var("LG_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS * 1000);

        Ok(Self::new(url, api_key).with_timeout(Duration::from_millis(timeout_ms)))
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Unexpected(format!("{} is not set", name)))
}
