//! Thin client for the n8n public REST API (`/api/v1`).

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, error};

use crate::error::{AdapterError, Result};
use crate::models::{Node, Workflow, WorkflowSummary};

const API_KEY_HEADER: &str = "X-N8N-API-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// n8n API client
///
/// Holds the base URL and API key for one upstream instance. Cloning is
/// cheap; the inner `reqwest::Client` is shared.
#[derive(Clone)]
pub struct N8nClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Creation payload in the shape n8n's workflow API accepts.
///
/// Deliberately has no `active` field: n8n treats `active` as read-only at
/// creation time, so activation is always a separate call.
#[derive(Serialize)]
struct CreateWorkflowRequest<'a> {
    name: &'a str,
    nodes: &'a [Node],
    connections: &'a Map<String, Value>,
    settings: WorkflowSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowSettings {
    execution_order: &'static str,
    save_data_error_execution: &'static str,
    save_data_success_execution: &'static str,
    save_manual_executions: bool,
    save_execution_progress: bool,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            execution_order: "v1",
            save_data_error_execution: "all",
            save_data_success_execution: "all",
            save_manual_executions: true,
            save_execution_progress: true,
        }
    }
}

#[derive(serde::Deserialize)]
struct WorkflowList {
    #[serde(default)]
    data: Vec<WorkflowSummary>,
}

impl N8nClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest client");
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn execute<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "n8n API error");
            return Err(AdapterError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// POST /workflows. The returned record carries the id n8n assigned.
    pub async fn create_workflow(
        &self,
        name: &str,
        nodes: &[Node],
        connections: &Map<String, Value>,
    ) -> Result<Workflow> {
        let payload = CreateWorkflowRequest {
            name,
            nodes,
            connections,
            settings: WorkflowSettings::default(),
        };
        debug!(workflow = name, "creating workflow");
        self.execute(self.client.post(self.url("/workflows")).json(&payload))
            .await
    }

    /// PUT /workflows/{id} with `{"active": true}`. Always a distinct call,
    /// strictly after a successful creation.
    pub async fn activate_workflow(&self, id: &str) -> Result<Workflow> {
        debug!(workflow_id = id, "activating workflow");
        self.execute(
            self.client
                .put(self.url(&format!("/workflows/{id}")))
                .json(&json!({ "active": true })),
        )
        .await
    }

    /// GET /workflows, unwrapping n8n's `{ "data": [...] }` envelope.
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowSummary>> {
        let list: WorkflowList = self.execute(self.client.get(self.url("/workflows"))).await?;
        Ok(list.data)
    }

    /// GET /workflows/{id}. An upstream 404 means the workflow does not
    /// exist, which callers need to distinguish from upstream failure.
    pub async fn get_workflow(&self, id: &str) -> Result<Workflow> {
        let result = self
            .execute(self.client.get(self.url(&format!("/workflows/{id}"))))
            .await;
        match result {
            Err(AdapterError::Upstream { status: 404, .. }) => {
                Err(AdapterError::NotFound(id.to_string()))
            }
            other => other,
        }
    }
}
