use serde_json::json;

use arazzo_gen_source::bundle::bundle;
use arazzo_gen_source::RefError;

#[test]
fn expands_local_refs() {
    let doc = json!({
        "components": {
            "schemas": {
                "Pet": {"type": "object"}
            }
        },
        "paths": {
            "/pets": {
                "post": {
                    "requestBody": {
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
                        }
                    }
                }
            }
        }
    });

    let bundled = bundle(&doc).unwrap();
    assert_eq!(
        bundled.pointer("/paths/~1pets/post/requestBody/content/application~1json/schema"),
        Some(&json!({"type": "object"}))
    );
}

#[test]
fn expands_nested_refs() {
    let doc = json!({
        "a": {"$ref": "#/b"},
        "b": {"inner": {"$ref": "#/c"}},
        "c": 42
    });

    let bundled = bundle(&doc).unwrap();
    assert_eq!(bundled["a"], json!({"inner": 42}));
}

#[test]
fn sibling_reuse_of_a_target_is_not_a_cycle() {
    let doc = json!({
        "first": {"$ref": "#/shared"},
        "second": {"$ref": "#/shared"},
        "shared": {"type": "string"}
    });

    let bundled = bundle(&doc).unwrap();
    assert_eq!(bundled["first"], bundled["second"]);
}

#[test]
fn cyclic_refs_are_fatal() {
    let doc = json!({
        "a": {"$ref": "#/b"},
        "b": {"$ref": "#/a"}
    });

    let err = bundle(&doc).unwrap_err();
    assert!(matches!(err, RefError::Cycle(_)));
}

#[test]
fn external_refs_are_rejected() {
    let doc = json!({
        "a": {"$ref": "other.yaml#/components/schemas/Pet"}
    });

    let err = bundle(&doc).unwrap_err();
    assert!(matches!(err, RefError::External(_)));
}

#[test]
fn unresolvable_refs_are_rejected() {
    let doc = json!({
        "a": {"$ref": "#/nowhere"}
    });

    let err = bundle(&doc).unwrap_err();
    assert!(matches!(err, RefError::NotFound(_)));
}
