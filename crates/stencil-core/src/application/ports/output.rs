//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::TemplateSchema;
use crate::error::StencilResult;

/// A regular file found while walking a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full path, usable with [`Filesystem::read_file`].
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated on every platform.
    pub relative: String,
}

/// Port for filesystem operations.
///
/// Serves both as the source-tree provider during extraction and as the
/// output sink during generation.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Methods return raw `io::Result`; services attach the failing operation
/// and path when converting to [`crate::error::StencilError`].
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write bytes to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively list regular files under `root`.
    ///
    /// Order must be stable across runs on an unchanged tree.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<SourceEntry>>;
}

/// Port for registered schemas.
///
/// Implemented by:
/// - `stencil_adapters::schema_store::InMemorySchemaStore`
pub trait SchemaStore: Send + Sync {
    /// Insert or replace a schema, keyed by its name.
    fn insert(&self, schema: TemplateSchema) -> StencilResult<()>;

    /// Get a schema by name.
    fn get(&self, name: &str) -> StencilResult<Option<TemplateSchema>>;

    /// First schema (in name order) whose type tag matches.
    fn find_by_type(&self, template_type: &str) -> StencilResult<Option<TemplateSchema>>;

    /// Registered schema names, sorted.
    fn list(&self) -> StencilResult<Vec<String>>;
}
