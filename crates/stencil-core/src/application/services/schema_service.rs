//! Schema Service - registered schema operations.
//!
//! Embedders register schema files once and then generate from them by
//! schema name or template type. Separated from [`super::ProjectService`]
//! because it needs no template types.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SchemaStore},
        services::{GenerationReport, Generator, read_schema},
    },
    domain::{EnvVariable, SchemaValidator, TemplateSchema, TemplateVariables, Variable},
    error::StencilResult,
};

/// Summary of a schema for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub version: String,
    pub description: String,
    pub variables: BTreeMap<String, Variable>,
    pub file_count: usize,
    pub templated_count: usize,
    pub env_var_count: usize,
    pub total_size: u64,
    pub hooks: BTreeMap<String, Vec<String>>,
}

impl From<&TemplateSchema> for SchemaInfo {
    fn from(schema: &TemplateSchema) -> Self {
        Self {
            name: schema.name.clone(),
            template_type: schema.template_type.clone(),
            version: schema.version.clone(),
            description: schema.description.clone(),
            variables: schema.variables.clone().unwrap_or_default(),
            file_count: schema.files.len(),
            templated_count: schema.templated_count(),
            env_var_count: schema.env_config.len(),
            total_size: schema.total_size(),
            hooks: schema.hooks.clone().unwrap_or_default(),
        }
    }
}

/// Service for registered schemas.
pub struct SchemaService {
    store: Box<dyn SchemaStore>,
    filesystem: Box<dyn Filesystem>,
}

impl SchemaService {
    pub fn new(store: Box<dyn SchemaStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Validate and store a schema. Replaces any schema with the same name.
    #[instrument(skip_all, fields(schema = %schema.name))]
    pub fn register(&self, schema: TemplateSchema) -> StencilResult<()> {
        SchemaValidator::validate(&schema)
            .map_err(|e| ApplicationError::rejected("register_schema", e))?;
        debug!(files = schema.files.len(), "Schema registered");
        self.store.insert(schema)
    }

    /// Load, validate and store a schema file. Returns the schema name.
    pub fn register_file(&self, path: impl AsRef<Path>) -> StencilResult<String> {
        let schema = read_schema(self.filesystem.as_ref(), path.as_ref(), "register_schema")?;
        let name = schema.name.clone();
        self.register(schema)?;
        Ok(name)
    }

    /// Registered names, sorted.
    pub fn list(&self) -> StencilResult<Vec<String>> {
        self.store.list()
    }

    /// Find a schema by name, falling back to its template type.
    pub fn lookup(&self, name_or_type: &str) -> StencilResult<TemplateSchema> {
        if let Some(schema) = self.store.get(name_or_type)? {
            return Ok(schema);
        }
        self.store.find_by_type(name_or_type)?.ok_or_else(|| {
            ApplicationError::SchemaNotFound {
                name: name_or_type.to_owned(),
            }
            .into()
        })
    }

    pub fn info(&self, name_or_type: &str) -> StencilResult<SchemaInfo> {
        Ok(SchemaInfo::from(&self.lookup(name_or_type)?))
    }

    pub fn env_config(&self, name_or_type: &str) -> StencilResult<Vec<EnvVariable>> {
        Ok(self.lookup(name_or_type)?.env_config)
    }

    /// Generate from a registered schema.
    pub fn generate(
        &self,
        name_or_type: &str,
        variables: TemplateVariables,
        output_dir: impl AsRef<Path>,
    ) -> StencilResult<GenerationReport> {
        let schema = self.lookup(name_or_type)?;
        Generator::from_schema(
            schema,
            output_dir.as_ref(),
            variables,
            self.filesystem.as_ref(),
        )
        .generate()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use super::*;
    use crate::application::services::testing::MockFs;
    use crate::domain::{EnvVariable, FileSpec, codec};
    use crate::error::{ErrorCategory, StencilError};

    /// Minimal store for exercising the lookup order.
    #[derive(Default)]
    struct MapStore(RwLock<BTreeMap<String, TemplateSchema>>);

    impl SchemaStore for MapStore {
        fn insert(&self, schema: TemplateSchema) -> StencilResult<()> {
            self.0.write().unwrap().insert(schema.name.clone(), schema);
            Ok(())
        }
        fn get(&self, name: &str) -> StencilResult<Option<TemplateSchema>> {
            Ok(self.0.read().unwrap().get(name).cloned())
        }
        fn find_by_type(&self, template_type: &str) -> StencilResult<Option<TemplateSchema>> {
            Ok(self
                .0
                .read()
                .unwrap()
                .values()
                .find(|s| s.template_type == template_type)
                .cloned())
        }
        fn list(&self) -> StencilResult<Vec<String>> {
            Ok(self.0.read().unwrap().keys().cloned().collect())
        }
    }

    fn schema(name: &str, template_type: &str) -> TemplateSchema {
        let content = b"hello";
        let (stored, compressed) = codec::compress(content).unwrap();
        let mut schema = TemplateSchema::new(name, template_type, "1.0.0")
            .with_variables(BTreeMap::from([(
                "ProjectName".to_string(),
                Variable::required("Name"),
            )]));
        schema.add_file(FileSpec {
            path: "hello.txt".into(),
            template: false,
            content: stored,
            size: content.len() as u64,
            hash: codec::content_hash(content),
            compressed,
            mappings: vec![],
        });
        schema.env_config = vec![EnvVariable {
            name: "PORT".into(),
            description: "Port".into(),
            example: "8080".into(),
        }];
        schema
    }

    fn service() -> SchemaService {
        SchemaService::new(Box::<MapStore>::default(), Box::new(MockFs::new()))
    }

    #[test]
    fn lookup_prefers_name_then_type() {
        let svc = service();
        svc.register(schema("frontend-react-template", "frontend")).unwrap();
        svc.register(schema("frontend", "go-api")).unwrap();

        assert_eq!(svc.lookup("frontend").unwrap().template_type, "go-api");
        assert_eq!(
            svc.lookup("go-api").unwrap().name,
            "frontend",
            "falls back to type"
        );
        assert_eq!(svc.list().unwrap(), vec!["frontend", "frontend-react-template"]);
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let err = service().lookup("rails").unwrap_err();
        assert!(matches!(
            err,
            StencilError::Application(ApplicationError::SchemaNotFound { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn register_rejects_invalid_schema() {
        let svc = service();
        let mut broken = schema("x", "frontend");
        broken.files.clear();

        let err = svc.register(broken).unwrap_err();
        assert!(err.to_string().contains("register_schema"));
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn info_and_env_config() {
        let svc = service();
        svc.register(schema("go-api-template", "go-api")).unwrap();

        let info = svc.info("go-api").unwrap();
        assert_eq!(info.file_count, 1);
        assert_eq!(info.templated_count, 0);
        assert_eq!(info.env_var_count, 1);
        assert_eq!(info.total_size, 5);

        let env = svc.env_config("go-api-template").unwrap();
        assert_eq!(env[0].name, "PORT");
    }
}
