//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use stencil_core::application::ports::{Filesystem, SourceEntry};
use tracing::trace;
use walkdir::WalkDir;

use super::slash_path;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Files only, ordered by file name at every level.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| io::Error::other(e.to_string()))?;
            trace!(path = %relative.display(), "Found file");

            entries.push(SourceEntry {
                relative: slash_path(relative),
                path: entry.into_path(),
            });
        }

        Ok(entries)
    }
}

fn walk_error(e: walkdir::Error) -> io::Error {
    let message = e.to_string();
    e.into_io_error().unwrap_or_else(|| io::Error::other(message))
}
