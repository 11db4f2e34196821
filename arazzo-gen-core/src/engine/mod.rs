//! The workflow generation engine.
//!
//! Consumes the accessor's views (info, operations, security) and produces
//! one Arazzo document: a metadata block, a one-element source description
//! list, and one single-step workflow per source operation. The per-operation
//! loop is strictly sequential — identifier uniqueness bookkeeping is shared
//! mutable state across iterations.

mod ident;
mod security;
mod workflow;

pub use ident::{path_based_id, sanitize_id, IdNamespace, IdRegistry};

use crate::error::GenerateError;
use crate::source::{SourceInfo, SourceViews};
use crate::types::{ArazzoDocument, Info, SourceDescription, SourceDescriptionType};

/// The Arazzo Specification version stamped on generated documents.
pub const ARAZZO_VERSION: &str = "1.0.1";

const DEFAULT_INFO_VERSION: &str = "0.0.1";

/// Builds the whole output document from one bundled source document.
///
/// Either returns the complete document or the first fatal condition; there
/// is no partial-success mode.
pub fn generate<S: SourceViews>(source: &S) -> Result<ArazzoDocument, GenerateError> {
    let info = build_info(&source.info(), source.source_location());

    let source_descriptions = vec![SourceDescription {
        name: source.source_name().to_string(),
        url: source.source_location().to_string(),
        source_type: SourceDescriptionType::Openapi,
    }];

    let schemes = source.security_schemes();
    let global_security = source.global_security();

    let mut ids = IdRegistry::default();
    let mut workflows = Vec::new();
    for op in source.operations() {
        workflows.push(workflow::build_workflow(
            &op,
            source.source_name(),
            schemes.as_ref(),
            global_security.as_deref(),
            &mut ids,
        )?);
    }

    Ok(ArazzoDocument {
        arazzo: ARAZZO_VERSION.to_string(),
        info,
        source_descriptions,
        workflows,
    })
}

/// Document-level metadata from the source's `info` block; absence of any
/// field is handled by substitution.
fn build_info(info: &SourceInfo, source_location: &str) -> Info {
    let title = match &info.title {
        Some(title) if !title.is_empty() => title.clone(),
        _ => format!("Arazzo Workflow for {source_location}"),
    };

    Info {
        title,
        summary: info.summary.clone(),
        description: info.description.clone(),
        version: info
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_INFO_VERSION.to_string()),
    }
}
