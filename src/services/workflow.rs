//! The three adapter operations: validate tool arguments, call n8n, map
//! the result back. No local state, no retries.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{AdapterError, Result};
use crate::models::{Node, Workflow, WorkflowSummary};
use crate::n8n::N8nClient;

/// Arguments for `n8n_create_workflow`, as supplied by the MCP caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkflowArgs {
    pub name: String,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Map<String, Value>,
    #[serde(default)]
    pub active: bool,
}

/// Arguments for `n8n_get_workflow`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetWorkflowArgs {
    pub id: String,
}

fn validate_create(args: &CreateWorkflowArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(AdapterError::Validation(
            "workflow name must not be empty".to_string(),
        ));
    }
    if args.nodes.is_empty() {
        return Err(AdapterError::Validation(
            "workflow must contain at least one node".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for node in &args.nodes {
        if node.id.trim().is_empty() {
            return Err(AdapterError::Validation(
                "node id must not be empty".to_string(),
            ));
        }
        if !seen.insert(node.id.as_str()) {
            return Err(AdapterError::Validation(format!(
                "duplicate node id: {}",
                node.id
            )));
        }
    }
    Ok(())
}

/// Create a workflow, then activate it in a second call when requested.
///
/// The two stages are deliberately separate upstream calls: n8n treats
/// `active` as read-only at creation time. When activation fails the
/// workflow stays behind in the `created` (inactive) state and the failure
/// is surfaced as `ActivationFailed` carrying its id; there is no rollback.
pub async fn create_workflow(n8n: &N8nClient, args: CreateWorkflowArgs) -> Result<Workflow> {
    validate_create(&args)?;

    let created = n8n
        .create_workflow(&args.name, &args.nodes, &args.connections)
        .await?;
    info!(workflow_id = %created.id, name = %created.name, "workflow created");

    if !args.active {
        return Ok(created);
    }

    match n8n.activate_workflow(&created.id).await {
        Ok(activated) => {
            info!(workflow_id = %activated.id, "workflow activated");
            Ok(activated)
        }
        Err(source) => {
            warn!(workflow_id = %created.id, error = %source, "workflow created but activation failed");
            Err(AdapterError::ActivationFailed {
                workflow_id: created.id,
                source: Box::new(source),
            })
        }
    }
}

pub async fn list_workflows(n8n: &N8nClient) -> Result<Vec<WorkflowSummary>> {
    n8n.list_workflows().await
}

pub async fn get_workflow(n8n: &N8nClient, args: GetWorkflowArgs) -> Result<Workflow> {
    if args.id.trim().is_empty() {
        return Err(AdapterError::Validation(
            "workflow id must not be empty".to_string(),
        ));
    }
    n8n.get_workflow(&args.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str) -> Node {
        serde_json::from_value(json!({ "id": id, "type": "n8n-nodes-base.webhook" })).unwrap()
    }

    fn args(name: &str, nodes: Vec<Node>) -> CreateWorkflowArgs {
        CreateWorkflowArgs {
            name: name.to_string(),
            nodes,
            connections: Map::new(),
            active: false,
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = validate_create(&args("  ", vec![node("a")]));
        assert!(matches!(result, Err(AdapterError::Validation(_))));
    }

    #[test]
    fn empty_node_list_is_rejected() {
        let result = validate_create(&args("Test Workflow", vec![]));
        assert!(matches!(result, Err(AdapterError::Validation(_))));
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let result = validate_create(&args("Test Workflow", vec![node("a"), node("a")]));
        match result {
            Err(AdapterError::Validation(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_arguments_pass() {
        let result = validate_create(&args("Test Workflow", vec![node("a"), node("b")]));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_nodes_fail_before_any_network_call() {
        // Unroutable address: a network attempt would error differently
        // than the validation error asserted here.
        let n8n = N8nClient::new("http://127.0.0.1:1", "key");
        let result = create_workflow(&n8n, args("Test Workflow", vec![])).await;
        assert!(matches!(result, Err(AdapterError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_id_fails_before_any_network_call() {
        let n8n = N8nClient::new("http://127.0.0.1:1", "key");
        let result = get_workflow(&n8n, GetWorkflowArgs { id: "".to_string() }).await;
        assert!(matches!(result, Err(AdapterError::Validation(_))));
    }
}
