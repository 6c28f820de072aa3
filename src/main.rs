use n8n_mcp_adapter::api::{self, AppState};
use n8n_mcp_adapter::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,n8n_mcp_adapter=debug".into()),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(n8n_api_url = %config.n8n_api_url, "starting n8n MCP adapter");

    let addr = format!("{}:{}", config.host, config.port);
    let app = api::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("n8n MCP adapter listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
