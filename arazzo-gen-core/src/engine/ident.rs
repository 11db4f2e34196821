use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static INVALID_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("valid"));
static UNDERSCORE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__+").expect("valid"));

/// Rewrites `raw` into the `workflowId`/`stepId` charset: every character
/// outside `[A-Za-z0-9_-]` becomes `_`, runs of `_` collapse to one, and
/// leading/trailing `_` are trimmed.
pub fn sanitize_id(raw: &str) -> String {
    let replaced = INVALID_CHAR_RE.replace_all(raw, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&replaced, "_");
    collapsed.trim_matches('_').to_string()
}

/// Base identifier for operations without an `operationId`:
/// `<method>_<path>` with `{param}` braces stripped, the leading slash
/// removed, and the remaining slashes turned into underscores.
pub fn path_based_id(method: &str, path: &str) -> String {
    let flattened = path
        .trim_start_matches('/')
        .replace(['{', '}'], "")
        .replace('/', "_");
    sanitize_id(&format!("{method}_{flattened}"))
}

/// One identifier namespace. `claim` returns the base unchanged when free,
/// otherwise the first `<base>_<n>` that is; the winner is registered before
/// the next operation is processed.
#[derive(Debug, Default)]
pub struct IdNamespace {
    used: HashSet<String>,
}

impl IdNamespace {
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{base}_{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Uniqueness bookkeeping for one generation run. Workflow and step ids are
/// independent namespaces; the registry is owned by the engine for the
/// duration of the run and discarded after.
#[derive(Debug, Default)]
pub struct IdRegistry {
    pub workflows: IdNamespace,
    pub steps: IdNamespace,
}
