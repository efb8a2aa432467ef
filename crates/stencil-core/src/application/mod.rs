//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, SchemaService,
//!   Extractor, Generator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Registry**: Template types available to extraction
//! - **Errors**: Application-specific error types
//!
//! Schema rules live in `crate::domain`; this layer adds I/O and ordering.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use services::{
    ENV_EXAMPLE_FILE, ExtractOptions, Extractor, GenerationReport, Generator, GeneratorState,
    ProjectService, SchemaInfo, SchemaService,
};

pub use ports::{Filesystem, SchemaStore, SourceEntry, TemplateType, TemplateTypeInfo};

pub use registry::TemplateRegistry;

pub use error::ApplicationError;
