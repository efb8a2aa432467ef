//! Domain layer: the schema model and the pure rules around it.
//!
//! Nothing here performs I/O. Extraction and generation orchestrate these
//! pieces from `crate::application`.

pub mod codec;
pub mod env_example;
pub mod error;
pub mod schema;
pub mod templating;
pub mod validation;
pub mod variables;

pub use env_example::parse_env_example;
pub use error::{DomainError, ErrorCategory};
pub use schema::{EnvVariable, FileSpec, Mapping, TemplateSchema, Variable};
pub use templating::TemplatePipeline;
pub use validation::SchemaValidator;
pub use variables::TemplateVariables;
