use thiserror::Error;

/// Retrieval and bundling failures. All are fatal: the engine never runs on a
/// partially resolved document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("fetching document from {url} failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse document as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse document as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Ref(#[from] RefError),
}

#[derive(Debug, Clone, Error)]
pub enum RefError {
    #[error("unsupported external $ref: {0}")]
    External(String),
    #[error("unresolvable $ref: {0}")]
    NotFound(String),
    #[error("cyclic $ref: {0}")]
    Cycle(String),
}
