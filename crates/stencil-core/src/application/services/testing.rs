//! Shared test doubles for the services.

use std::io;
use std::path::Path;

use mockall::mock;

use crate::application::ports::{Filesystem, SourceEntry};

mock! {
    pub Fs {}
    impl Filesystem for Fs {
        fn create_dir_all(&self, path: &Path) -> io::Result<()>;
        fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
        fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
        fn exists(&self, path: &Path) -> bool;
        fn is_dir(&self, path: &Path) -> bool;
        fn walk_files(&self, root: &Path) -> io::Result<Vec<SourceEntry>>;
    }
}
