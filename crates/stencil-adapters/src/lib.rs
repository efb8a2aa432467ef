//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! template types that ship with Stencil.

pub mod filesystem;
pub mod schema_store;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema_store::InMemorySchemaStore;
pub use templates::{
    BuiltinTemplate, FrontendTemplate, FullstackTemplate, GoApiTemplate, builtin_registry,
};
