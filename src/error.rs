//! Error types for the adapter

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

/// Adapter error types
///
/// Every failure maps directly to an MCP error response; there is no retry
/// or local recovery anywhere.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Unauthorized")]
    Auth,

    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Workflow not found: {0}")]
    NotFound(String),

    #[error("n8n returned {status}")]
    Upstream { status: u16, body: String },

    /// The workflow exists upstream but the follow-up activation call
    /// failed. The creation is not rolled back.
    #[error("workflow {workflow_id} was created but activation failed: {source}")]
    ActivationFailed {
        workflow_id: String,
        #[source]
        source: Box<AdapterError>,
    },

    #[error("n8n request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdapterError::Auth => StatusCode::UNAUTHORIZED,
            AdapterError::Validation(_) => StatusCode::BAD_REQUEST,
            AdapterError::NotFound(_) => StatusCode::NOT_FOUND,
            AdapterError::Upstream { .. }
            | AdapterError::ActivationFailed { .. }
            | AdapterError::Transport(_) => StatusCode::BAD_GATEWAY,
            AdapterError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match self {
            AdapterError::Upstream { status, body } => json!({
                "error": self.to_string(),
                "upstream_status": status,
                "upstream_body": body,
            }),
            AdapterError::ActivationFailed {
                workflow_id,
                source,
            } => {
                let mut value = source.body();
                if let Some(map) = value.as_object_mut() {
                    map.insert("error".to_string(), json!(self.to_string()));
                    map.insert("workflow_id".to_string(), json!(workflow_id));
                }
                value
            }
            _ => json!({ "error": self.to_string() }),
        }
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_body_embeds_status_and_body() {
        let err = AdapterError::Upstream {
            status: 500,
            body: "boom".to_string(),
        };
        let body = err.body();
        assert_eq!(body["upstream_status"], 500);
        assert_eq!(body["upstream_body"], "boom");
    }

    #[test]
    fn activation_failure_keeps_workflow_id_and_upstream_details() {
        let err = AdapterError::ActivationFailed {
            workflow_id: "wf-1".to_string(),
            source: Box::new(AdapterError::Upstream {
                status: 400,
                body: "bad".to_string(),
            }),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        let body = err.body();
        assert_eq!(body["workflow_id"], "wf-1");
        assert_eq!(body["upstream_status"], 400);
        assert!(body["error"].as_str().unwrap().contains("wf-1"));
    }

    #[test]
    fn not_found_is_distinct_from_upstream() {
        let err = AdapterError::NotFound("abc".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
