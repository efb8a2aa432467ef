//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: source-tree walking and output writing
//!   - `SchemaStore`: registered schemas
//!   - `TemplateType`: per-project-kind extraction rules
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;
pub mod template_type;

pub use output::{Filesystem, SchemaStore, SourceEntry};
pub use template_type::{TemplateType, TemplateTypeInfo};
