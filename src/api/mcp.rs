//! The `/mcp` endpoint: MCP envelope parsing, bearer auth, tool dispatch.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::api::{AppState, tools};
use crate::error::{AdapterError, Result};
use crate::services::workflow::{self, CreateWorkflowArgs, GetWorkflowArgs};

/// Inbound MCP request envelope.
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub method: String,
    #[serde(default)]
    pub params: Option<ToolCallParams>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

// POST /mcp
pub async fn handle_mcp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<McpRequest>,
) -> Response {
    if !authorized(&headers, &state.config.auth_token) {
        warn!("rejected /mcp request: missing or invalid bearer token");
        return AdapterError::Auth.into_response();
    }

    match request.method.as_str() {
        "tools/list" => Json(tools::catalog()).into_response(),
        "tools/call" => match request.params {
            Some(params) => match call_tool(&state, params).await {
                Ok(result) => Json(result).into_response(),
                Err(err) => err.into_response(),
            },
            None => {
                AdapterError::Validation("missing params in tool call".to_string()).into_response()
            }
        },
        other => AdapterError::Validation(format!("unknown method: {other}")).into_response(),
    }
}

async fn call_tool(state: &AppState, params: ToolCallParams) -> Result<Value> {
    info!(tool = %params.name, "tool call");
    match params.name.as_str() {
        tools::CREATE_WORKFLOW => {
            let args: CreateWorkflowArgs = parse_args(params.arguments)?;
            let workflow = workflow::create_workflow(&state.n8n, args).await?;
            Ok(tool_result(
                format!(
                    "Successfully created workflow '{}' with ID: {} (active: {})",
                    workflow.name, workflow.id, workflow.active
                ),
                json!({
                    "id": workflow.id,
                    "name": workflow.name,
                    "active": workflow.active,
                }),
            ))
        }
        tools::LIST_WORKFLOWS => {
            let workflows = workflow::list_workflows(&state.n8n).await?;
            let lines: Vec<String> = workflows
                .iter()
                .map(|w| format!("- {} (ID: {}, Active: {})", w.name, w.id, w.active))
                .collect();
            Ok(tool_result(
                format!("Found {} workflows:\n{}", workflows.len(), lines.join("\n")),
                json!({ "workflows": workflows }),
            ))
        }
        tools::GET_WORKFLOW => {
            let args: GetWorkflowArgs = parse_args(params.arguments)?;
            let workflow = workflow::get_workflow(&state.n8n, args).await?;
            let text = format!(
                "Workflow '{}' (ID: {}, Active: {}, Nodes: {})",
                workflow.name,
                workflow.id,
                workflow.active,
                workflow.nodes.len()
            );
            Ok(tool_result(text, serde_json::to_value(&workflow)?))
        }
        other => Err(AdapterError::Validation(format!("unknown tool: {other}"))),
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| AdapterError::Validation(format!("invalid tool arguments: {e}")))
}

/// MCP tool result: a human-readable content block plus the machine-readable
/// record in `structuredContent`.
fn tool_result(text: String, structured: Value) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": structured,
    })
}

fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    match extract_bearer(headers.get(header::AUTHORIZATION)) {
        Some(token) => constant_time_eq(&token, expected),
        None => false,
    }
}

fn extract_bearer(header: Option<&HeaderValue>) -> Option<String> {
    let value = header?.to_str().ok()?;
    // Accept both "Bearer <token>" and a bare token.
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();
    (!token.is_empty()).then(|| token.to_string())
}

// Comparing SHA-256 digests keeps the comparison time independent of where
// the tokens first differ.
fn constant_time_eq(a: &str, b: &str) -> bool {
    Sha256::digest(a.as_bytes()) == Sha256::digest(b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_value(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).unwrap()
    }

    #[test]
    fn extract_bearer_strips_prefix() {
        let value = header_value("Bearer secret-token");
        assert_eq!(
            extract_bearer(Some(&value)),
            Some("secret-token".to_string())
        );
    }

    #[test]
    fn extract_bearer_accepts_bare_token() {
        let value = header_value("secret-token");
        assert_eq!(
            extract_bearer(Some(&value)),
            Some("secret-token".to_string())
        );
    }

    #[test]
    fn extract_bearer_rejects_empty() {
        let value = header_value("Bearer   ");
        assert_eq!(extract_bearer(Some(&value)), None);
        assert_eq!(extract_bearer(None), None);
    }

    #[test]
    fn token_comparison() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }

    #[test]
    fn malformed_arguments_become_validation_errors() {
        let result: Result<GetWorkflowArgs> = parse_args(json!({ "nope": true }));
        assert!(matches!(result, Err(AdapterError::Validation(_))));
    }
}
