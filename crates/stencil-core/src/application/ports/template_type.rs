//! Template type strategy.
//!
//! One implementation per project kind. Each decides which files are
//! skipped, which are templated, what literal mappings apply to them, and
//! which variables the resulting schema declares.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::application::{ports::Filesystem, services::Extractor};
use crate::domain::{Mapping, TemplateSchema, Variable};
use crate::error::StencilResult;

/// Extraction rules for one kind of project.
///
/// All path arguments are relative to the source root and `/`-separated.
pub trait TemplateType: Send + Sync {
    /// Registry key and schema type tag, e.g. `frontend`.
    fn name(&self) -> &str;

    /// Name recorded in extracted schemas, e.g. `frontend-react-template`.
    fn schema_name(&self) -> &str;

    fn description(&self) -> &str;

    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Lifecycle hooks recorded in the schema.
    fn hooks(&self) -> BTreeMap<String, Vec<String>> {
        BTreeMap::new()
    }

    /// Literal substitutions for a templated file, in application order.
    fn get_mappings(&self, relative_path: &str) -> Vec<Mapping>;

    fn get_variables(&self) -> BTreeMap<String, Variable>;

    fn should_template(&self, relative_path: &str) -> bool;

    fn should_skip(&self, relative_path: &str) -> bool;

    /// Extract a schema from `source_dir` using these rules.
    fn extract(&self, fs: &dyn Filesystem, source_dir: &Path) -> StencilResult<TemplateSchema> {
        Extractor::new(fs).extract(source_dir, self)
    }

    fn info(&self) -> TemplateTypeInfo {
        TemplateTypeInfo {
            name: self.name().to_owned(),
            schema_name: self.schema_name().to_owned(),
            description: self.description().to_owned(),
            variables: self.get_variables(),
        }
    }
}

/// Display metadata for a template type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateTypeInfo {
    pub name: String,
    pub schema_name: String,
    pub description: String,
    pub variables: BTreeMap<String, Variable>,
}
