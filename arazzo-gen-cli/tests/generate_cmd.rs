use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    f.write_all(contents.as_bytes()).expect("write");
    f
}

const PETSTORE: &str = r#"
{
  "openapi": "3.0.0",
  "info": {"title": "Petstore", "version": "1.0.0"},
  "security": [{"apiKeyAuth": []}],
  "components": {
    "securitySchemes": {
      "apiKeyAuth": {"type": "apiKey", "name": "X-Api-Key", "in": "header"}
    }
  },
  "paths": {
    "/pets/{petId}": {
      "get": {
        "parameters": [
          {"name": "petId", "in": "path", "required": true, "schema": {"type": "string"}}
        ]
      }
    },
    "/orders": {
      "post": {
        "operationId": "createOrder",
        "requestBody": {
          "required": true,
          "content": {"application/json": {"schema": {"type": "object"}}}
        }
      }
    }
  }
}
"#;

#[test]
fn generates_a_document_from_a_local_openapi_file() {
    let input = write_temp(PETSTORE);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let out_path = out_dir.path().join("arazzo.json");

    let bin = assert_cmd::cargo::cargo_bin!("arazzo-gen");
    Command::new(bin)
        .args([
            "--openapi",
            input.path().to_string_lossy().as_ref(),
            "--output",
            out_path.to_string_lossy().as_ref(),
            "--quiet",
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).expect("output file");
    let doc: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");

    assert_eq!(doc["arazzo"], "1.0.1");
    assert_eq!(doc["info"]["title"], "Petstore");
    assert_eq!(doc["sourceDescriptions"][0]["type"], "openapi");

    let workflows = doc["workflows"].as_array().expect("workflows array");
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[0]["workflowId"], "get_pets_petId");
    assert_eq!(workflows[0]["inputs"]["X-Api-Key"], serde_json::json!({"type": "string"}));
    assert_eq!(workflows[1]["workflowId"], "createOrder");
    assert_eq!(workflows[1]["steps"][0]["operationId"], "createOrder");
    assert_eq!(
        workflows[1]["steps"][0]["requestBody"]["payload"],
        "$inputs.requestBody"
    );
}

#[test]
fn missing_input_file_fails_with_source_exit_code() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    let out_path = out_dir.path().join("arazzo.json");

    let bin = assert_cmd::cargo::cargo_bin!("arazzo-gen");
    Command::new(bin)
        .args([
            "-i",
            "/no/such/openapi.json",
            "-o",
            out_path.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(2); // SOURCE_FAILED
    assert!(!out_path.exists(), "no partial output on failure");
}

#[test]
fn unknown_scheme_fails_with_generation_exit_code() {
    let doc = r#"
{
  "openapi": "3.0.0",
  "info": {"title": "Broken", "version": "1.0.0"},
  "security": [{"ghost": []}],
  "paths": {"/pets": {"get": {}}}
}
"#;
    let input = write_temp(doc);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let out_path = out_dir.path().join("arazzo.json");

    let bin = assert_cmd::cargo::cargo_bin!("arazzo-gen");
    Command::new(bin)
        .args([
            "-i",
            input.path().to_string_lossy().as_ref(),
            "-o",
            out_path.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(3); // GENERATION_FAILED
    assert!(!out_path.exists(), "no partial output on failure");
}
