//! Project Service - the extract and generate workflows.
//!
//! Validates caller input, resolves the template type, and runs the
//! [`Extractor`] or [`Generator`] over the configured filesystem.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateTypeInfo},
        registry::TemplateRegistry,
        services::{Extractor, GenerationReport, Generator, read_schema, write_schema},
    },
    domain::{TemplateSchema, TemplateVariables},
    error::StencilResult,
};

/// What to extract and with which rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub source_dir: PathBuf,
    pub template_type: String,
}

impl ExtractOptions {
    pub fn new(source_dir: impl Into<PathBuf>, template_type: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            template_type: template_type.into(),
        }
    }
}

/// Main workflow service.
pub struct ProjectService {
    registry: TemplateRegistry,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(registry: TemplateRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn list_template_types(&self) -> Vec<TemplateTypeInfo> {
        self.registry.infos()
    }

    pub fn template_type_info(&self, name: &str) -> StencilResult<TemplateTypeInfo> {
        Ok(self.registry.require(name)?.info())
    }

    /// Extract a schema from a reference project.
    #[instrument(
        skip_all,
        fields(source = %options.source_dir.display(), template_type = %options.template_type)
    )]
    pub fn extract(&self, options: &ExtractOptions) -> StencilResult<TemplateSchema> {
        const OPERATION: &str = "extract";

        if options.source_dir.as_os_str().is_empty() {
            return Err(invalid(OPERATION, "source directory is required"));
        }
        if options.template_type.trim().is_empty() {
            return Err(invalid(OPERATION, "template type is required"));
        }

        let template_type = self.registry.require(&options.template_type)?;
        Extractor::new(self.filesystem.as_ref()).extract(&options.source_dir, template_type)
    }

    /// Generate a project from an in-memory schema.
    #[instrument(
        skip_all,
        fields(schema = %schema.name, output = %output_dir.as_ref().display())
    )]
    pub fn generate(
        &self,
        schema: TemplateSchema,
        variables: TemplateVariables,
        output_dir: impl AsRef<Path>,
    ) -> StencilResult<GenerationReport> {
        const OPERATION: &str = "generate";

        let output_dir = output_dir.as_ref();
        if variables.project_name.trim().is_empty() {
            return Err(invalid(OPERATION, "project name is required"));
        }
        if variables.github_repo.trim().is_empty() {
            return Err(invalid(OPERATION, "GitHub repository is required"));
        }
        if output_dir.as_os_str().is_empty() {
            return Err(invalid(OPERATION, "output directory is required"));
        }

        Generator::from_schema(schema, output_dir, variables, self.filesystem.as_ref()).generate()
    }

    /// Extract and immediately generate without persisting the schema.
    pub fn extract_and_generate(
        &self,
        options: &ExtractOptions,
        variables: TemplateVariables,
        output_dir: impl AsRef<Path>,
    ) -> StencilResult<GenerationReport> {
        let schema = self.extract(options)?;
        info!(files = schema.files.len(), "Schema extracted, generating");
        self.generate(schema, variables, output_dir)
    }

    /// Read a schema file.
    pub fn load_schema(&self, path: impl AsRef<Path>) -> StencilResult<TemplateSchema> {
        read_schema(self.filesystem.as_ref(), path.as_ref(), "load_schema")
    }

    /// Write a schema file as pretty JSON.
    pub fn save_schema(&self, schema: &TemplateSchema, path: impl AsRef<Path>) -> StencilResult<()> {
        write_schema(self.filesystem.as_ref(), schema, path.as_ref(), "save_schema")
    }

    /// Load a schema file and generate from it.
    pub fn generate_from_file(
        &self,
        schema_path: impl AsRef<Path>,
        variables: TemplateVariables,
        output_dir: impl AsRef<Path>,
    ) -> StencilResult<GenerationReport> {
        let schema = self.load_schema(schema_path)?;
        self.generate(schema, variables, output_dir)
    }
}

fn invalid(operation: &'static str, message: &str) -> crate::error::StencilError {
    ApplicationError::Validation {
        operation,
        message: message.to_owned(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{SourceEntry, TemplateType};
    use crate::application::services::testing::MockFs;
    use crate::domain::{Mapping, Variable};
    use crate::error::{ErrorCategory, StencilError};

    struct TextType;

    impl TemplateType for TextType {
        fn name(&self) -> &str {
            "text"
        }
        fn schema_name(&self) -> &str {
            "text-template"
        }
        fn description(&self) -> &str {
            "plain text"
        }
        fn get_mappings(&self, _: &str) -> Vec<Mapping> {
            vec![Mapping::new("Sample", "{{.ProjectName}}")]
        }
        fn get_variables(&self) -> BTreeMap<String, Variable> {
            BTreeMap::from([
                ("ProjectName".to_string(), Variable::required("Name")),
                ("GitHubRepo".to_string(), Variable::required("Repo")),
            ])
        }
        fn should_template(&self, path: &str) -> bool {
            path.ends_with(".txt")
        }
        fn should_skip(&self, _: &str) -> bool {
            false
        }
    }

    type Files = Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>;

    /// A mock backed by a shared map: reads see earlier writes.
    fn shared_fs(seed: &[(&str, &[u8])]) -> (MockFs, Files) {
        let files: Files = Arc::new(Mutex::new(
            seed.iter()
                .map(|(p, b)| (PathBuf::from(p), b.to_vec()))
                .collect(),
        ));
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_is_dir().returning(|p| p == Path::new("/src"));

        let store = Arc::clone(&files);
        fs.expect_exists()
            .returning(move |p| store.lock().unwrap().contains_key(p));

        let store = Arc::clone(&files);
        fs.expect_read_file().returning(move |p| {
            store
                .lock()
                .unwrap()
                .get(p)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        });

        let store = Arc::clone(&files);
        fs.expect_write_file().returning(move |p, b| {
            store.lock().unwrap().insert(p.to_path_buf(), b.to_vec());
            Ok(())
        });

        let store = Arc::clone(&files);
        fs.expect_walk_files().returning(move |root| {
            let mut entries: Vec<SourceEntry> = store
                .lock()
                .unwrap()
                .keys()
                .filter_map(|p| {
                    let relative = p.strip_prefix(root).ok()?.to_str()?.to_owned();
                    Some(SourceEntry {
                        path: p.clone(),
                        relative,
                    })
                })
                .collect();
            entries.sort_by(|a, b| a.relative.cmp(&b.relative));
            Ok(entries)
        });

        (fs, files)
    }

    fn service(fs: MockFs) -> ProjectService {
        ProjectService::new(TemplateRegistry::new().with(Box::new(TextType)), Box::new(fs))
    }

    #[test]
    fn extract_requires_source_and_type() {
        let svc = service(MockFs::new());

        let err = svc.extract(&ExtractOptions::new("", "text")).unwrap_err();
        assert!(err.to_string().contains("source directory is required"));

        let err = svc.extract(&ExtractOptions::new("/src", " ")).unwrap_err();
        assert!(err.to_string().contains("template type is required"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn extract_unknown_type_is_not_found() {
        let svc = service(MockFs::new());
        let err = svc.extract(&ExtractOptions::new("/src", "rails")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn generate_validates_inputs() {
        let svc = service(MockFs::new());
        let schema = TemplateSchema::new("a", "text", "1.0.0");

        for (vars, out, expected) in [
            (TemplateVariables::new("", "a/b"), "/out", "project name"),
            (TemplateVariables::new("app", ""), "/out", "GitHub repository"),
            (TemplateVariables::new("app", "a/b"), "", "output directory"),
        ] {
            let err = svc.generate(schema.clone(), vars, out).unwrap_err();
            assert!(
                matches!(err, StencilError::Application(ApplicationError::Validation { .. })),
                "{expected}: {err}"
            );
            assert!(err.to_string().contains(expected));
        }
    }

    #[test]
    fn extract_and_generate_round_trip() {
        let (fs, files) = shared_fs(&[
            ("/src/hello.txt", b"Sample says {{ hi }}"),
            ("/src/data.bin", &[0, 159, 146, 150]),
        ]);
        let svc = service(fs);

        let report = svc
            .extract_and_generate(
                &ExtractOptions::new("/src", "text"),
                TemplateVariables::new("demo", "acme/demo"),
                "/out",
            )
            .unwrap();

        assert_eq!(report.files_written, 2);
        assert_eq!(report.templated_files, 1);
        let files = files.lock().unwrap();
        assert_eq!(files[Path::new("/out/hello.txt")], b"demo says {{ hi }}");
        assert_eq!(files[Path::new("/out/data.bin")], [0, 159, 146, 150]);
    }

    #[test]
    fn saved_schema_generates_from_file() {
        let (fs, files) = shared_fs(&[("/src/hello.txt", b"Sample")]);
        let svc = service(fs);

        let schema = svc.extract(&ExtractOptions::new("/src", "text")).unwrap();
        svc.save_schema(&schema, "/schemas/text.json").unwrap();
        assert_eq!(svc.load_schema("/schemas/text.json").unwrap(), schema);

        svc.generate_from_file(
            "/schemas/text.json",
            TemplateVariables::new("widget", "acme/widget"),
            "/out",
        )
        .unwrap();
        assert_eq!(files.lock().unwrap()[Path::new("/out/hello.txt")], b"widget");
    }

    #[test]
    fn load_missing_schema_is_filesystem_error() {
        let (fs, _) = shared_fs(&[]);
        let err = service(fs).load_schema("/nope.json").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FileSystem);
    }

    #[test]
    fn load_malformed_schema_is_schema_error() {
        let (fs, _) = shared_fs(&[("/bad.json", b"{ nope")]);
        let err = service(fs).load_schema("/bad.json").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Schema);
    }

    #[test]
    fn template_type_info_lists_variables() {
        let svc = service(MockFs::new());
        let info = svc.template_type_info("text").unwrap();
        assert_eq!(info.schema_name, "text-template");
        assert!(info.variables.contains_key("GitHubRepo"));
        assert_eq!(svc.list_template_types().len(), 1);
    }
}
