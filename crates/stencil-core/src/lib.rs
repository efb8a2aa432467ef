//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stencil, a tool
//! that extracts a self-contained template schema from a reference project and
//! later replays it against user-supplied variables to produce a new project.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectService, SchemaService,         │
//! │  Extractor, Generator)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, SchemaStore, TemplateType) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinTemplate, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateSchema, codec, validation,     │
//! │  templating pipeline)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::prelude::*;
//! # fn demo(registry: TemplateRegistry, fs: Box<dyn Filesystem>) -> StencilResult<()> {
//! let service = ProjectService::new(registry, fs);
//!
//! let schema = service.extract(&ExtractOptions::new("../frontend-template", "frontend"))?;
//! let variables = TemplateVariables::new("my-app", "acme/my-app");
//! service.generate(schema, variables, "./my-app")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExtractOptions, Extractor, GenerationReport, Generator, GeneratorState, ProjectService,
        SchemaInfo, SchemaService, TemplateRegistry,
        ports::{Filesystem, SchemaStore, SourceEntry, TemplateType, TemplateTypeInfo},
    };
    pub use crate::domain::{
        EnvVariable, FileSpec, Mapping, SchemaValidator, TemplateSchema, TemplateVariables,
        Variable,
    };
    pub use crate::error::{ErrorCategory, StencilError, StencilResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
