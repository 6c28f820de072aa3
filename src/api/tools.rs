//! Tool catalog served for `tools/list`.

use serde_json::{Value, json};

pub const CREATE_WORKFLOW: &str = "n8n_create_workflow";
pub const LIST_WORKFLOWS: &str = "n8n_list_workflows";
pub const GET_WORKFLOW: &str = "n8n_get_workflow";

pub fn catalog() -> Value {
    json!({
        "tools": [
            {
                "name": CREATE_WORKFLOW,
                "description": "Create a new workflow in n8n",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Workflow name" },
                        "nodes": { "type": "array", "description": "Array of workflow nodes" },
                        "connections": { "type": "object", "description": "Node connections" },
                        "active": { "type": "boolean", "description": "Whether to activate the workflow" }
                    },
                    "required": ["name", "nodes", "connections"]
                }
            },
            {
                "name": LIST_WORKFLOWS,
                "description": "List all workflows in n8n",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            },
            {
                "name": GET_WORKFLOW,
                "description": "Get a specific workflow by ID",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Workflow ID" }
                    },
                    "required": ["id"]
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_three_tools() {
        let catalog = catalog();
        let tools = catalog["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec![CREATE_WORKFLOW, LIST_WORKFLOWS, GET_WORKFLOW]);
    }
}
