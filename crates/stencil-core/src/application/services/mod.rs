//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "extract a schema" or "generate from a registered schema".

pub mod extractor;
pub mod generator;
pub mod project_service;
pub mod schema_service;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use extractor::{ENV_EXAMPLE_FILE, Extractor};
pub use generator::{GenerationReport, Generator, GeneratorState};
pub use project_service::{ExtractOptions, ProjectService};
pub use schema_service::{SchemaInfo, SchemaService};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::TemplateSchema,
    error::StencilResult,
};

/// Load a serialized schema through the filesystem port.
pub(crate) fn read_schema(
    fs: &dyn Filesystem,
    path: &Path,
    operation: &'static str,
) -> StencilResult<TemplateSchema> {
    if !fs.exists(path) {
        return Err(ApplicationError::PathNotFound {
            operation,
            path: path.to_path_buf(),
        }
        .into());
    }

    let bytes = fs
        .read_file(path)
        .map_err(|source| ApplicationError::SourceRead {
            operation,
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&bytes)
        .map_err(|source| ApplicationError::SchemaFormat { operation, source }.into())
}

/// Serialize a schema as pretty JSON and write it, creating parent dirs.
pub(crate) fn write_schema(
    fs: &dyn Filesystem,
    schema: &TemplateSchema,
    path: &Path,
    operation: &'static str,
) -> StencilResult<()> {
    let json = schema
        .to_json_pretty()
        .map_err(|source| ApplicationError::SchemaFormat { operation, source })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .map_err(|source| ApplicationError::OutputWrite {
                operation,
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs.write_file(path, json.as_bytes())
        .map_err(|source| ApplicationError::OutputWrite {
            operation,
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
