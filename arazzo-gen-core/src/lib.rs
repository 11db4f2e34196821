#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod source;
pub mod types;

pub use crate::engine::{generate, ARAZZO_VERSION};
pub use crate::error::GenerateError;
pub use crate::source::SourceViews;
pub use crate::types::ArazzoDocument;
