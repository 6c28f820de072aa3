use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single workflow node in n8n's wire format.
///
/// The adapter is not the schema authority for nodes; n8n is. Fields the
/// adapter does not know about are carried through verbatim via `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion", default, skip_serializing_if = "Option::is_none")]
    pub type_version: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_round_trip() {
        let raw = json!({
            "id": "webhook-1",
            "name": "Webhook",
            "type": "n8n-nodes-base.webhook",
            "typeVersion": 1.1,
            "position": [250.0, 300.0],
            "parameters": { "path": "incoming" },
            "webhookId": "abc-123"
        });

        let node: Node = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.id, "webhook-1");
        assert_eq!(node.node_type, "n8n-nodes-base.webhook");
        assert_eq!(node.extra["webhookId"], "abc-123");

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn minimal_node_deserializes() {
        let node: Node =
            serde_json::from_value(json!({ "id": "n1", "type": "n8n-nodes-base.set" })).unwrap();
        assert_eq!(node.name, "");
        assert!(node.type_version.is_none());
        assert!(node.parameters.is_empty());
    }
}
