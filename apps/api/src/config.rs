use anyhow::{Context, Result};

/// Default shortlisting threshold when SHORTLIST_THRESHOLD is not set.
/// Candidates with an overall match at or above this percentage are kept.
const DEFAULT_SHORTLIST_THRESHOLD: u8 = 70;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Company name used in invitation subjects and bodies.
    pub company_name: String,
    /// Default shortlisting threshold for new sessions (0–100).
    pub shortlist_threshold: u8,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            company_name: std::env::var("COMPANY_NAME")
                .unwrap_or_else(|_| "Hireflow".to_string()),
            shortlist_threshold: std::env::var("SHORTLIST_THRESHOLD")
                .ok()
                .map(|v| {
                    v.parse::<u8>()
                        .context("SHORTLIST_THRESHOLD must be an integer 0-100")
                })
                .transpose()?
                .map(|t| t.min(100))
                .unwrap_or(DEFAULT_SHORTLIST_THRESHOLD),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
