pub type JsonSchema = serde_json::Value;
pub type RuntimeExpression = String;

/// Declared workflow inputs, input name → JSON schema.
///
/// Insertion order is preserved (`serde_json/preserve_order`): request body
/// first, then required parameters in source order, then security credentials.
pub type Inputs = serde_json::Map<String, JsonSchema>;
