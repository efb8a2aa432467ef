//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not schema
//! rules. Rule violations are `DomainError` from `crate::domain`. Every
//! variant names the operation that failed and keeps the underlying cause
//! reachable through `source()`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Caller supplied missing or invalid input.
    #[error("validation error in {operation}: {message}")]
    Validation {
        operation: &'static str,
        message: String,
    },

    /// A domain rule rejected the operation.
    #[error("{} error in {operation}: {source}", .source.category_label())]
    Rejected {
        operation: &'static str,
        #[source]
        source: DomainError,
    },

    /// A file in the source tree could not be listed or read.
    #[error("extraction error in {operation}: failed to read {path}: {source}")]
    SourceRead {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file or directory could not be written.
    #[error("generation error in {operation}: failed to write {path}: {source}")]
    OutputWrite {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single file failed to render during generation.
    #[error("generation error in {operation}: failed to process file {path}: {source}")]
    FileProcessing {
        operation: &'static str,
        path: String,
        #[source]
        source: DomainError,
    },

    /// A required path does not exist.
    #[error("filesystem error in {operation}: {path} does not exist")]
    PathNotFound {
        operation: &'static str,
        path: PathBuf,
    },

    /// Filesystem failure without an OS error (e.g. the in-memory adapter).
    #[error("filesystem error in {operation}: {path}: {reason}")]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Schema JSON could not be parsed or produced.
    #[error("schema error in {operation}: {source}")]
    SchemaFormat {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No template type registered under this name.
    #[error("template type '{name}' not found")]
    TemplateTypeNotFound {
        name: String,
        available: Vec<String>,
    },

    /// No schema registered under this name or type.
    #[error("schema '{name}' not found")]
    SchemaNotFound { name: String },

    /// A one-shot object was used twice.
    #[error("internal error in {operation}: invalid state {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// Store access failed (lock poisoned).
    #[error("schema store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],
            Self::Rejected { source, .. } | Self::FileProcessing { source, .. } => {
                source.suggestions()
            }
            Self::SourceRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the reference project is readable".into(),
            ],
            Self::OutputWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Delete the partially generated directory before retrying".into(),
            ],
            Self::PathNotFound { path, .. } => vec![
                format!("Path does not exist: {}", path.display()),
                "Check the path or your configured reference projects".into(),
            ],
            Self::SchemaFormat { .. } => vec![
                "The schema file is not valid JSON".into(),
                "Re-extract it with: stencil extract <dir> --type <type>".into(),
            ],
            Self::TemplateTypeNotFound { available, .. } => {
                let mut suggestions = vec!["Available template types:".to_string()];
                suggestions.extend(available.iter().map(|name| format!("  • {}", name)));
                suggestions.push("Try: stencil list".into());
                suggestions
            }
            Self::SchemaNotFound { name } => vec![
                format!("No registered schema is named or typed '{}'", name),
                "Register the schema file first".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Rejected { source, .. } => source.category().into(),
            Self::SourceRead { .. } => ErrorCategory::Extraction,
            Self::OutputWrite { .. } | Self::FileProcessing { .. } => ErrorCategory::Generation,
            Self::PathNotFound { .. } | Self::Filesystem { .. } => ErrorCategory::FileSystem,
            Self::SchemaFormat { .. } => ErrorCategory::Schema,
            Self::TemplateTypeNotFound { .. } | Self::SchemaNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidState { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Wrap a domain rejection with the operation name.
    pub fn rejected(operation: &'static str, source: DomainError) -> Self {
        Self::Rejected { operation, source }
    }
}

impl DomainError {
    fn category_label(&self) -> &'static str {
        ErrorCategory::from(self.category()).as_str()
    }
}
