use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Header a fronting auth proxy sets to the caller's resolved role
pub const DEFAULT_ROLE_HEADER: &str = "x-atlas-role";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub role_header: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test fixtures)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let role_header = lookup("ROLE_HEADER")
            .map(|header| header.trim().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_ROLE_HEADER.to_string());
        axum::http::HeaderName::from_bytes(role_header.as_bytes())
            .context("ROLE_HEADER must be a valid HTTP header name")?;

        Ok(Self {
            port,
            allowed_origins,
            role_header,
        })
    }
}
