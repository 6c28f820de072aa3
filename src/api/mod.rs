pub mod mcp;
pub mod openapi;
pub mod state;
pub mod tools;

pub use state::AppState;

use axum::http::{Method, header};
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Serialize)]
struct Health {
    status: String,
    service: String,
    n8n_configured: bool,
    auth_configured: bool,
}

// GET /health — no auth, fixed shape
async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        n8n_configured: !state.config.n8n_api_key.is_empty(),
        auth_configured: !state.config.auth_token.is_empty(),
    })
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/mcp", post(mcp::handle_mcp))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_spec))
        .layer(cors)
        .with_state(state)
}
