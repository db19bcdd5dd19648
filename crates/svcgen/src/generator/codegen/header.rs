use super::GeneratedFileType;

/// Service details repeated at the top of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub source: String,
}

impl GeneratedFileType {
  fn summary(self) -> &'static str {
    match self {
      Self::Shapes => "Data shapes",
      Self::Resources => "Resource classes",
      Self::Module => "Module wiring",
    }
  }
}

pub(crate) fn with_header(metadata: &CodeMetadata, file_type: GeneratedFileType, code: &str) -> String {
  format!(
    r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! {}: {}
//! Source: {}
//! Version: {}
//! Generated by `svcgen`

{code}",
    metadata.title,
    file_type.summary(),
    metadata.source,
    metadata.version,
  )
}
