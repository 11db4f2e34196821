use std::collections::BTreeMap;

use crate::error::GenerateError;
use crate::source::{SecurityRequirement, SecurityScheme, SourceOperation};
use crate::types::{Inputs, Parameter, RequestBody, Step, Workflow};

use super::ident::{path_based_id, sanitize_id, IdRegistry};
use super::security::apply_security;

/// Turns one source operation into one single-step workflow.
pub(crate) fn build_workflow(
    op: &SourceOperation,
    source_name: &str,
    schemes: Option<&BTreeMap<String, SecurityScheme>>,
    global_security: Option<&[SecurityRequirement]>,
    ids: &mut IdRegistry,
) -> Result<Workflow, GenerateError> {
    let base = match &op.operation_id {
        Some(id) => sanitize_id(id),
        None => path_based_id(&op.method, &op.path),
    };
    let workflow_id = ids.workflows.claim(&base);
    // Single-step workflows reuse the workflow id as the step base.
    let step_id = ids.steps.claim(&workflow_id);

    let mut inputs = Inputs::new();
    let mut parameters = Vec::new();

    let request_body = build_request_body(op, &mut inputs)?;

    for p in op.parameters.iter().filter(|p| p.required) {
        inputs.insert(
            p.name.clone(),
            p.schema
                .clone()
                .unwrap_or_else(|| serde_json::json!({"type": "string"})),
        );
        parameters.push(Parameter {
            name: p.name.clone(),
            location: p.location,
            value: format!("$inputs.{}", p.name),
        });
    }

    apply_security(op, schemes, global_security, &mut inputs, &mut parameters)?;

    let operation_path = op
        .operation_id
        .is_none()
        .then(|| operation_path_ref(source_name, &op.path, &op.method));

    let step = Step {
        step_id,
        operation_id: op.operation_id.clone(),
        operation_path,
        parameters: (!parameters.is_empty()).then_some(parameters),
        request_body,
    };

    Ok(Workflow {
        workflow_id,
        inputs: (!inputs.is_empty()).then_some(inputs),
        steps: vec![step],
    })
}

/// Registers the `requestBody` input and builds the step descriptor.
///
/// Bodies that are present but not required contribute nothing; a required
/// body must declare at least one content entry, and the first one in
/// declaration order wins.
fn build_request_body(
    op: &SourceOperation,
    inputs: &mut Inputs,
) -> Result<Option<RequestBody>, GenerateError> {
    let Some(body) = &op.request_body else {
        return Ok(None);
    };
    if !body.required {
        return Ok(None);
    }

    let Some(entry) = body.content.first() else {
        return Err(GenerateError::EmptyRequestBody {
            method: op.method.clone(),
            path: op.path.clone(),
        });
    };

    inputs.insert(
        "requestBody".to_string(),
        entry.schema.clone().unwrap_or_else(|| serde_json::json!({})),
    );

    Ok(Some(RequestBody {
        content_type: entry.content_type.clone(),
        payload: "$inputs.requestBody".to_string(),
    }))
}

/// Reference expression for steps with no `operationId`:
/// `{$sourceDescriptions.<name>.url}#/paths<escapedPath>/<method>`.
///
/// Only `~` and `/` are pointer-escaped; `{param}` braces pass through
/// verbatim, so `/users/{id}` becomes `~1users~1{id}`.
pub(crate) fn operation_path_ref(source_name: &str, path: &str, method: &str) -> String {
    let escaped = path.replace('~', "~0").replace('/', "~1");
    format!("{{$sourceDescriptions.{source_name}.url}}#/paths{escaped}/{method}")
}
