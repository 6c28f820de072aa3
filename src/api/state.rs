use std::sync::Arc;

use crate::config::AppConfig;
use crate::n8n::N8nClient;

/// Application state shared across all API handlers
///
/// Built once at startup from the loaded configuration; read-only after
/// that, so concurrent requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub n8n: N8nClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let n8n = N8nClient::new(&config.n8n_api_url, &config.n8n_api_key);
        Self {
            config: Arc::new(config),
            n8n,
        }
    }
}
