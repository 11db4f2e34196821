use thiserror::Error;

/// Fatal conditions raised while assembling the output document.
///
/// Field absence and skip-branches (optional bodies, non-required parameters,
/// non-apiKey schemes) are normal control flow, not errors; generation either
/// produces the whole document or nothing.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("security requirement references unknown scheme '{0}'")]
    UnknownSecurityScheme(String),
    #[error("required request body for {method} {path} declares no content entries")]
    EmptyRequestBody { method: String, path: String },
}
