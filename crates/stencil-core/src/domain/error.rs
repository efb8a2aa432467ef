// ============================================================================
// domain/error.rs - SCHEMA, VARIABLE AND TEMPLATING ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable and comparable (tests match on exact variants)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Structural schema violations
    // ========================================================================
    #[error("schema {field} is required")]
    MissingIdentity { field: &'static str },

    #[error("schema variables are required")]
    MissingVariables,

    #[error("variable {name} must have a type")]
    VariableMissingType { name: String },

    #[error("schema must contain at least one file")]
    NoFiles,

    #[error("file {index} must have a path")]
    FileMissingPath { index: usize },

    #[error("file {path} must have content")]
    FileMissingContent { path: String },

    // ========================================================================
    // Integrity
    // ========================================================================
    #[error("file {path} hash mismatch: expected {expected}, got {actual}")]
    HashMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("file {path} content could not be decoded: {reason}")]
    UndecodableContent { path: String, reason: String },

    #[error("content decode failed: {reason}")]
    Decode { reason: String },

    #[error("content encode failed: {reason}")]
    Encode { reason: String },

    #[error("file path {path} escapes the output directory")]
    UnsafePath { path: String },

    // ========================================================================
    // Variable binding
    // ========================================================================
    #[error("required variable {name} is not set")]
    RequiredVariable { name: String },

    // ========================================================================
    // Templating
    // ========================================================================
    #[error("failed to parse template: {reason}")]
    TemplateParse { reason: String },

    #[error("failed to execute template: {reason}")]
    TemplateExecute { reason: String },

    #[error("templated file {path} is not valid UTF-8")]
    NonUtf8Template { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingIdentity { field } => vec![
                format!("The schema has no '{}' field", field),
                "Re-extract the schema with: stencil extract <dir> --type <type>".into(),
            ],
            Self::NoFiles => vec![
                "The schema contains no files".into(),
                "Check the source directory was not entirely skipped by the template type rules"
                    .into(),
            ],
            Self::HashMismatch { path, .. } => vec![
                format!("Content of '{}' does not match its recorded hash", path),
                "The schema file was corrupted or edited by hand".into(),
                "Re-extract the schema from the reference project".into(),
            ],
            Self::UndecodableContent { path, .. } => vec![
                format!("Stored content of '{}' is not valid base64/gzip", path),
                "Re-extract the schema from the reference project".into(),
            ],
            Self::RequiredVariable { name } => vec![
                format!("Provide a value for '{}'", name),
                "Use --project-name / --github-repo, or --var KEY=VALUE".into(),
            ],
            Self::TemplateParse { .. } | Self::TemplateExecute { .. } => vec![
                "A templated file contains an expression that cannot be evaluated".into(),
                "Check the mappings recorded for that file in the schema".into(),
            ],
            Self::NonUtf8Template { path } => vec![
                format!("'{}' is binary but marked for templating", path),
                "Binary files must not be templated".into(),
            ],
            _ => vec!["Re-extract the schema or inspect it with: stencil inspect <file>".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RequiredVariable { .. } => ErrorCategory::Validation,
            Self::TemplateParse { .. }
            | Self::TemplateExecute { .. }
            | Self::NonUtf8Template { .. } => ErrorCategory::Generation,
            Self::Encode { .. } => ErrorCategory::Extraction,
            _ => ErrorCategory::Schema,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Schema,
    Extraction,
    Generation,
}
