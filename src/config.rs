use anyhow::{Context, Result, bail};
use std::env;

/// Process-wide configuration, loaded once at startup and immutable after.
///
/// The three upstream/auth variables are required; the server refuses to
/// start without them. Host and port have the usual defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the n8n instance, e.g. `http://n8n:5678`
    pub n8n_api_url: String,
    /// API key sent to n8n as `X-N8N-API-KEY`
    pub n8n_api_key: String,
    /// Bearer token this adapter requires from its own callers
    pub auth_token: String,
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let n8n_api_url = require("N8N_API_URL")?;
        let n8n_api_key = require("N8N_API_KEY")?;
        let auth_token = require("AUTH_TOKEN")?;

        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {value}"))?,
            Err(_) => default_port(),
        };

        Ok(Self {
            n8n_api_url,
            n8n_api_key,
            auth_token,
            host,
            port,
        })
    }
}

fn require(name: &str) -> Result<String> {
    let value =
        env::var(name).map_err(|_| anyhow::anyhow!("Missing required environment variable {name}"))?;
    if value.trim().is_empty() {
        bail!("Environment variable {name} is set but empty");
    }
    Ok(value)
}
