use std::collections::BTreeMap;

use crate::error::GenerateError;
use crate::source::{SecurityRequirement, SecurityScheme, SourceOperation};
use crate::types::{Inputs, Parameter, ParameterLocation};

/// Maps the operation's effective security requirements onto workflow inputs
/// and step parameters.
///
/// Operation-level `security` wins over the global list by presence, so an
/// explicitly empty operation list opts out. Only `apiKey` schemes are
/// actionable; the credential input is registered under the scheme's
/// parameter name with a fixed string schema, and the step parameter is
/// skipped when one with the same `(name, in)` pair already exists.
pub(crate) fn apply_security(
    op: &SourceOperation,
    schemes: Option<&BTreeMap<String, SecurityScheme>>,
    global: Option<&[SecurityRequirement]>,
    inputs: &mut Inputs,
    parameters: &mut Vec<Parameter>,
) -> Result<(), GenerateError> {
    let effective: &[SecurityRequirement] = match (&op.security, global) {
        (Some(own), _) => own,
        (None, Some(global)) => global,
        (None, None) => &[],
    };

    for requirement in effective {
        for scheme_name in requirement.keys() {
            let scheme = schemes
                .and_then(|s| s.get(scheme_name))
                .ok_or_else(|| GenerateError::UnknownSecurityScheme(scheme_name.clone()))?;

            match scheme {
                SecurityScheme::ApiKey(key) => {
                    inputs.insert(key.name.clone(), serde_json::json!({"type": "string"}));

                    let location = ParameterLocation::from(key.location);
                    let present = parameters
                        .iter()
                        .any(|p| p.name == key.name && p.location == location);
                    if !present {
                        parameters.push(Parameter {
                            name: key.name.clone(),
                            location,
                            value: format!("$inputs.{}", key.name),
                        });
                    }
                }
                // No workflow-input mapping for these scheme types.
                SecurityScheme::Http
                | SecurityScheme::OAuth2
                | SecurityScheme::OpenIdConnect
                | SecurityScheme::MutualTls => {}
            }
        }
    }

    Ok(())
}
