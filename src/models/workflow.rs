use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::node::Node;

/// Full workflow record as returned by n8n, the system of record.
///
/// Owned transiently for the duration of a single call; never persisted
/// locally. Unknown fields pass through via `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Map<String, Value>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trimmed record used for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workflow_tolerates_extra_upstream_fields() {
        let workflow: Workflow = serde_json::from_value(json!({
            "id": "wf-1",
            "name": "Demo",
            "active": true,
            "nodes": [],
            "connections": {},
            "createdAt": "2026-01-01T00:00:00.000Z",
            "versionId": "v-77",
            "tags": []
        }))
        .unwrap();

        assert_eq!(workflow.id, "wf-1");
        assert!(workflow.active);
        assert_eq!(workflow.extra["versionId"], "v-77");
    }

    #[test]
    fn summary_defaults_active_to_false() {
        let summary: WorkflowSummary =
            serde_json::from_value(json!({ "id": "wf-2", "name": "Quiet" })).unwrap();
        assert!(!summary.active);
        assert!(summary.created_at.is_none());
    }
}
