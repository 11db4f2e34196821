//! Read-only views of a bundled OpenAPI document, as consumed by the engine.
//!
//! The accessor crate resolves and bundles the source document up front; the
//! engine only ever sees these already-materialized snapshots and performs no
//! I/O of its own.

use std::collections::BTreeMap;

use crate::types::{JsonSchema, ParameterLocation};

/// The source document's `info` block. Every field is optional; absence is
/// handled by substitution during metadata assembly, never by failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceInfo {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// One HTTP method under one path in the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOperation {
    /// Path key as written in the source, `{param}` placeholders included.
    pub path: String,
    /// Lowercase HTTP verb.
    pub method: String,
    pub operation_id: Option<String>,
    pub parameters: Vec<SourceParameter>,
    pub request_body: Option<SourceRequestBody>,
    /// `None` inherits the document-level security requirements. `Some` —
    /// including `Some(vec![])` — replaces them, so an explicitly empty list
    /// opts the operation out.
    pub security: Option<Vec<SecurityRequirement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceParameter {
    pub name: String,
    pub location: ParameterLocation,
    /// True only when the source says `required: true` explicitly.
    pub required: bool,
    pub schema: Option<JsonSchema>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRequestBody {
    pub required: bool,
    /// Content entries in declaration order.
    pub content: Vec<ContentEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub content_type: String,
    pub schema: Option<JsonSchema>,
}

/// One security requirement: scheme name → scopes value, in document order.
pub type SecurityRequirement = serde_json::Map<String, serde_json::Value>;

/// A named entry of `components.securitySchemes`, keyed by its `type` tag.
///
/// Only `apiKey` maps onto workflow inputs; the remaining variants exist so
/// scheme handling stays a total match and later support for one of them is a
/// local extension.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    #[serde(rename = "apiKey")]
    ApiKey(ApiKeyScheme),
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
    #[serde(rename = "mutualTLS")]
    MutualTls,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiKeyScheme {
    /// The credential's parameter name (e.g. `X-Api-Key`).
    pub name: String,
    #[serde(rename = "in")]
    pub location: ApiKeyLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
    Cookie,
}

impl From<ApiKeyLocation> for ParameterLocation {
    fn from(location: ApiKeyLocation) -> Self {
        match location {
            ApiKeyLocation::Header => ParameterLocation::Header,
            ApiKeyLocation::Query => ParameterLocation::Query,
            ApiKeyLocation::Cookie => ParameterLocation::Cookie,
        }
    }
}

pub fn location_from_str(s: &str) -> Option<ParameterLocation> {
    match s {
        "path" => Some(ParameterLocation::Path),
        "query" => Some(ParameterLocation::Query),
        "header" => Some(ParameterLocation::Header),
        "cookie" => Some(ParameterLocation::Cookie),
        _ => None,
    }
}

/// The accessor-side seam: read-only views of one bundled source document.
///
/// Each view, once requested, is a stable snapshot for the duration of one
/// generation run; `operations` may be produced lazily but must preserve the
/// source document's path order and, within a path item, method declaration
/// order.
pub trait SourceViews {
    fn info(&self) -> SourceInfo;

    /// Short identifying name, embedded verbatim in generated reference
    /// expressions. Derived once by the accessor; opaque to the engine.
    fn source_name(&self) -> &str;

    /// Original path or URL, echoed verbatim into the output.
    fn source_location(&self) -> &str;

    fn operations(&self) -> Box<dyn Iterator<Item = SourceOperation> + '_>;

    fn security_schemes(&self) -> Option<BTreeMap<String, SecurityScheme>>;

    fn global_security(&self) -> Option<Vec<SecurityRequirement>>;
}
