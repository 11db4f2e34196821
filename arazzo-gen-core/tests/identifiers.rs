use arazzo_gen_core::engine::{path_based_id, sanitize_id, IdNamespace, IdRegistry};

#[test]
fn sanitize_replaces_invalid_characters() {
    assert_eq!(sanitize_id("get user.by id!"), "get_user_by_id");
    assert_eq!(sanitize_id("already-ok_123"), "already-ok_123");
}

#[test]
fn sanitize_collapses_runs_and_trims() {
    assert_eq!(sanitize_id("__a___b__"), "a_b");
    assert_eq!(sanitize_id("...leading.and.trailing..."), "leading_and_trailing");
}

#[test]
fn sanitized_ids_match_charset() {
    let samples = ["a b c", "x/y/z", "{weird}~stuff", "fine"];
    for raw in samples {
        let id = sanitize_id(raw);
        assert!(
            id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            "bad char in {id:?}"
        );
        assert!(!id.contains("__"), "doubled underscore in {id:?}");
        assert!(!id.starts_with('_') && !id.ends_with('_'), "edge underscore in {id:?}");
    }
}

#[test]
fn path_based_id_strips_braces_and_joins_with_underscores() {
    assert_eq!(path_based_id("get", "/users/{id}"), "get_users_id");
    assert_eq!(path_based_id("post", "/pet/{petId}/uploadImage"), "post_pet_petId_uploadImage");
    assert_eq!(path_based_id("get", "/"), "get");
}

#[test]
fn claim_suffixes_on_collision() {
    let mut ns = IdNamespace::default();
    assert_eq!(ns.claim("get_users_id"), "get_users_id");
    assert_eq!(ns.claim("get_users_id"), "get_users_id_1");
    assert_eq!(ns.claim("get_users_id"), "get_users_id_2");
}

#[test]
fn claim_skips_already_taken_suffixes() {
    let mut ns = IdNamespace::default();
    assert_eq!(ns.claim("op_1"), "op_1");
    assert_eq!(ns.claim("op"), "op");
    // "op_1" is taken by the explicit claim above.
    assert_eq!(ns.claim("op"), "op_2");
}

#[test]
fn workflow_and_step_namespaces_are_independent() {
    let mut ids = IdRegistry::default();
    assert_eq!(ids.workflows.claim("login"), "login");
    assert_eq!(ids.steps.claim("login"), "login");
    assert_eq!(ids.workflows.claim("login"), "login_1");
    assert_eq!(ids.steps.claim("login"), "login_1");
}
