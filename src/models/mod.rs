pub mod node;
pub mod workflow;

pub use node::Node;
pub use workflow::{Workflow, WorkflowSummary};
