use crate::types::{Info, SourceDescription, Workflow};

/// A generated Arazzo document, built once per run and serialized whole.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArazzoDocument {
    /// The Arazzo Specification version (e.g. "1.0.1").
    pub arazzo: String,

    pub info: Info,

    #[serde(rename = "sourceDescriptions")]
    pub source_descriptions: Vec<SourceDescription>,

    /// One workflow per source operation, in source document order.
    pub workflows: Vec<Workflow>,
}
