//! Runtime configuration from the environment.

pub const API_URL_VAR: &str = "COUNTRY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILTER: &str = "country_console=info,country_core=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the `/Countries` resource hangs off.
    pub api_url: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}
