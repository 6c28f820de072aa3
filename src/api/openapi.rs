//! Static OpenAPI description served for MCPO compatibility.

use axum::Json;
use serde_json::{Value, json};

// GET /openapi.json
pub async fn openapi_spec() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.0",
        "info": {
            "title": "n8n MCP Adapter",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "MCP adapter exposing n8n workflow operations as tools"
        },
        "servers": [
            { "url": "/" }
        ],
        "paths": {
            "/mcp": {
                "post": {
                    "summary": "Handle MCP requests",
                    "operationId": "handle_mcp_request",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "type": "object" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "object" }
                                }
                            }
                        }
                    },
                    "security": [
                        { "bearerAuth": [] }
                    ]
                }
            },
            "/health": {
                "get": {
                    "summary": "Liveness probe",
                    "operationId": "health_check",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "object" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": {
                    "type": "http",
                    "scheme": "bearer"
                }
            }
        }
    }))
}
