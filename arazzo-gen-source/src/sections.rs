//! Section views over one bundled OpenAPI document.

use std::collections::BTreeMap;

use serde_json::Value;

use arazzo_gen_core::source::{
    location_from_str, ContentEntry, SecurityRequirement, SecurityScheme, SourceInfo,
    SourceOperation, SourceParameter, SourceRequestBody, SourceViews,
};

use crate::bundle::bundle;
use crate::error::SourceError;
use crate::loader::load_document;

const METHOD_KEYS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// One resolved source document plus the views the engine consumes.
///
/// Loading fetches (or reads) and bundles exactly once; every view afterwards
/// is a snapshot over the in-memory document.
#[derive(Debug)]
pub struct OpenApiSource {
    location: String,
    name: String,
    doc: Value,
}

impl OpenApiSource {
    /// Fetches, parses, and bundles the document at `location` (local path or
    /// http(s) URL).
    pub async fn load(location: &str) -> Result<Self, SourceError> {
        let client = reqwest::Client::new();
        Self::load_with_client(&client, location).await
    }

    pub async fn load_with_client(
        client: &reqwest::Client,
        location: &str,
    ) -> Result<Self, SourceError> {
        let raw = load_document(client, location).await?;
        let doc = bundle(&raw)?;
        Ok(Self::from_value(location, doc))
    }

    /// Wraps an already-bundled document.
    pub fn from_value(location: &str, doc: Value) -> Self {
        Self {
            location: location.to_string(),
            name: short_name(location),
            doc,
        }
    }
}

impl SourceViews for OpenApiSource {
    fn info(&self) -> SourceInfo {
        let Some(info) = self.doc.get("info").and_then(|v| v.as_object()) else {
            return SourceInfo::default();
        };
        let field = |key: &str| info.get(key).and_then(|v| v.as_str()).map(String::from);
        SourceInfo {
            title: field("title"),
            summary: field("summary"),
            description: field("description"),
            version: field("version"),
        }
    }

    fn source_name(&self) -> &str {
        &self.name
    }

    fn source_location(&self) -> &str {
        &self.location
    }

    fn operations(&self) -> Box<dyn Iterator<Item = SourceOperation> + '_> {
        let Some(paths) = self.doc.get("paths").and_then(|v| v.as_object()) else {
            return Box::new(std::iter::empty());
        };
        Box::new(
            paths
                .iter()
                .flat_map(|(path, item)| path_operations(path, item)),
        )
    }

    fn security_schemes(&self) -> Option<BTreeMap<String, SecurityScheme>> {
        let schemes = self
            .doc
            .pointer("/components/securitySchemes")?
            .as_object()?;
        let mut out = BTreeMap::new();
        for (name, value) in schemes {
            // Scheme objects that do not match the tagged enum are dropped
            // from the view; a requirement referencing one then fails as an
            // unknown scheme.
            if let Ok(scheme) = serde_json::from_value::<SecurityScheme>(value.clone()) {
                out.insert(name.clone(), scheme);
            }
        }
        Some(out)
    }

    fn global_security(&self) -> Option<Vec<SecurityRequirement>> {
        self.doc.get("security").map(parse_security)
    }
}

/// Last path segment of the location, query/fragment and extension stripped,
/// reduced to the charset valid inside a runtime expression.
fn short_name(location: &str) -> String {
    let last = location
        .trim_end_matches('/')
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(location);
    let last = last.split(['?', '#']).next().unwrap_or(last);
    let stem = last.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(last);
    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        "openapi".to_string()
    } else {
        cleaned
    }
}

/// Operations of one path item, in method declaration order. Path-item-level
/// parameters apply to every operation unless overridden by `(name, in)`.
fn path_operations(path: &str, item: &Value) -> Vec<SourceOperation> {
    let Some(item) = item.as_object() else {
        return Vec::new();
    };

    let shared: Vec<SourceParameter> = item
        .get("parameters")
        .map(parse_parameters)
        .unwrap_or_default();

    let mut out = Vec::new();
    for (key, value) in item {
        if !METHOD_KEYS.contains(&key.as_str()) {
            continue;
        }
        let Some(op) = value.as_object() else {
            continue;
        };

        let own = op
            .get("parameters")
            .map(parse_parameters)
            .unwrap_or_default();
        let mut parameters: Vec<SourceParameter> = shared
            .iter()
            .filter(|s| !own.iter().any(|o| o.name == s.name && o.location == s.location))
            .cloned()
            .collect();
        parameters.extend(own);

        out.push(SourceOperation {
            path: path.to_string(),
            method: key.clone(),
            operation_id: op
                .get("operationId")
                .and_then(|v| v.as_str())
                .map(String::from),
            parameters,
            request_body: op.get("requestBody").and_then(parse_request_body),
            security: op.get("security").map(parse_security),
        });
    }
    out
}

fn parse_parameters(value: &Value) -> Vec<SourceParameter> {
    let Some(arr) = value.as_array() else {
        return Vec::new();
    };
    arr.iter().filter_map(parse_parameter).collect()
}

fn parse_parameter(param: &Value) -> Option<SourceParameter> {
    let name = param.get("name")?.as_str()?;
    let location = param.get("in")?.as_str().and_then(location_from_str)?;
    Some(SourceParameter {
        name: name.to_string(),
        location,
        required: param
            .get("required")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        schema: param.get("schema").cloned(),
    })
}

fn parse_request_body(value: &Value) -> Option<SourceRequestBody> {
    let body = value.as_object()?;
    let content = body
        .get("content")
        .and_then(|v| v.as_object())
        .map(|content| {
            content
                .iter()
                .map(|(content_type, media)| ContentEntry {
                    content_type: content_type.clone(),
                    schema: media.get("schema").cloned(),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(SourceRequestBody {
        required: body
            .get("required")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        content,
    })
}

fn parse_security(value: &Value) -> Vec<SecurityRequirement> {
    let Some(arr) = value.as_array() else {
        return Vec::new();
    };
    arr.iter()
        .filter_map(|req| req.as_object().cloned())
        .collect()
}
