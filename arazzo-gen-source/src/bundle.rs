//! Local `$ref` dereferencing, producing a self-contained document.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::RefError;

/// Expands every local `$ref` in `doc` recursively. External refs and ref
/// cycles are fatal; sibling reuse of the same target is fine.
pub fn bundle(doc: &Value) -> Result<Value, RefError> {
    let mut visited = HashSet::new();
    expand(doc, doc, &mut visited)
}

fn expand(doc: &Value, node: &Value, visited: &mut HashSet<String>) -> Result<Value, RefError> {
    match node {
        Value::Object(obj) => {
            if let Some(r) = obj.get("$ref").and_then(|v| v.as_str()) {
                let target = resolve_ref(doc, r, visited)?;
                let expanded = expand(doc, target, visited)?;
                // `visited` is a stack of the refs currently being expanded,
                // not a global seen-set.
                visited.remove(r);
                return Ok(expanded);
            }

            let mut out = serde_json::Map::new();
            for (key, value) in obj {
                out.insert(key.clone(), expand(doc, value, visited)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for value in arr {
                out.push(expand(doc, value, visited)?);
            }
            Ok(Value::Array(out))
        }
        other => Ok(other.clone()),
    }
}

fn resolve_ref<'a>(
    doc: &'a Value,
    ref_str: &str,
    visited: &mut HashSet<String>,
) -> Result<&'a Value, RefError> {
    // Only local refs are supported: "#/...".
    if !ref_str.starts_with('#') {
        return Err(RefError::External(ref_str.to_string()));
    }
    if !visited.insert(ref_str.to_string()) {
        return Err(RefError::Cycle(ref_str.to_string()));
    }

    doc.pointer(ref_str.trim_start_matches('#'))
        .ok_or_else(|| RefError::NotFound(ref_str.to_string()))
}
