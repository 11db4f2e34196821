use std::io::Write;
use std::path::Path;

use arazzo_gen_core::ArazzoDocument;

/// Serializes the document as pretty-printed JSON and writes it in one atomic
/// step: temp file in the destination directory, then rename over the target.
/// A mid-write failure leaves no partial output behind.
pub fn write_document(path: &Path, document: &ArazzoDocument) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(document)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
