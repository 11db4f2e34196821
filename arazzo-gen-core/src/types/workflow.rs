use crate::types::{Inputs, Step};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Workflow {
    /// Unique across the document (independent of step ids).
    #[serde(rename = "workflowId")]
    pub workflow_id: String,

    /// Omitted entirely when no inputs were declared, never emitted as `{}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Inputs>,

    /// Always exactly one step.
    pub steps: Vec<Step>,
}
