use crate::error::SourceError;

/// Whether `location` is a URL we fetch over the network rather than a local
/// file path.
pub fn is_remote(location: &str) -> bool {
    url::Url::parse(location)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

pub(crate) async fn load_document(
    client: &reqwest::Client,
    location: &str,
) -> Result<serde_json::Value, SourceError> {
    if is_remote(location) {
        let resp = client.get(location).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: location.to_string(),
                status,
            });
        }
        let body = resp.text().await?;
        parse_document_str(&body)
    } else {
        let body = std::fs::read_to_string(location).map_err(|e| SourceError::Io {
            path: location.to_string(),
            source: e,
        })?;
        parse_document_str(&body)
    }
}

/// Parses the document body as JSON or YAML.
pub(crate) fn parse_document_str(body: &str) -> Result<serde_json::Value, SourceError> {
    // Heuristic: JSON documents start with `{` after trimming.
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        Ok(serde_json::from_str(body)?)
    } else {
        let yaml: serde_yaml::Value = serde_yaml::from_str(body)?;
        Ok(serde_json::to_value(yaml)?)
    }
}
