use crate::types::RuntimeExpression;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RequestBody {
    #[serde(rename = "contentType")]
    pub content_type: String,

    /// Always `$inputs.requestBody`.
    pub payload: RuntimeExpression,
}
