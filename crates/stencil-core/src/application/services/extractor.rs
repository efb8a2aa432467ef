//! Extractor - turns a reference project directory into a schema.
//!
//! Walks the source tree, applies the template type's skip and templating
//! rules, embeds every kept file through the content codec, and finishes
//! with the whole-schema hash. Any read failure aborts the walk; a partial
//! schema is never returned.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SourceEntry, TemplateType},
    },
    domain::{FileSpec, TemplateSchema, codec, parse_env_example},
    error::StencilResult,
};

const OPERATION: &str = "extract";

/// Optional metadata scanned from the source root.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

pub struct Extractor<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> Extractor<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    #[instrument(
        skip_all,
        fields(source = %source_dir.display(), template_type = %template_type.name())
    )]
    pub fn extract<T>(&self, source_dir: &Path, template_type: &T) -> StencilResult<TemplateSchema>
    where
        T: TemplateType + ?Sized,
    {
        if !self.fs.is_dir(source_dir) {
            return Err(ApplicationError::PathNotFound {
                operation: OPERATION,
                path: source_dir.to_path_buf(),
            }
            .into());
        }

        let mut schema = TemplateSchema::new(
            template_type.schema_name(),
            template_type.name(),
            template_type.version(),
        )
        .with_description(template_type.description())
        .with_variables(template_type.get_variables())
        .with_hooks(template_type.hooks());

        let entries = self
            .fs
            .walk_files(source_dir)
            .map_err(|source| ApplicationError::SourceRead {
                operation: OPERATION,
                path: source_dir.to_path_buf(),
                source,
            })?;

        for entry in entries {
            if template_type.should_skip(&entry.relative) {
                debug!(path = %entry.relative, "Skipped");
                continue;
            }
            schema.add_file(self.file_spec(&entry, template_type)?);
        }

        self.attach_env_config(source_dir, &mut schema);

        schema.hash = codec::schema_hash(&schema);

        info!(
            files = schema.files.len(),
            templated = schema.templated_count(),
            env_vars = schema.env_config.len(),
            "Extraction completed"
        );
        Ok(schema)
    }

    fn file_spec<T>(&self, entry: &SourceEntry, template_type: &T) -> StencilResult<FileSpec>
    where
        T: TemplateType + ?Sized,
    {
        let bytes = self
            .fs
            .read_file(&entry.path)
            .map_err(|source| ApplicationError::SourceRead {
                operation: OPERATION,
                path: entry.path.clone(),
                source,
            })?;

        let (content, compressed) =
            codec::compress(&bytes).map_err(|e| ApplicationError::rejected(OPERATION, e))?;

        let template = template_type.should_template(&entry.relative);
        let mappings = if template {
            template_type.get_mappings(&entry.relative)
        } else {
            Vec::new()
        };

        debug!(path = %entry.relative, template, compressed, size = bytes.len(), "Embedded");

        Ok(FileSpec {
            path: entry.relative.clone(),
            template,
            content,
            size: bytes.len() as u64,
            hash: codec::content_hash(&bytes),
            compressed,
            mappings,
        })
    }

    /// Best effort: failures leave the env config empty.
    fn attach_env_config(&self, source_dir: &Path, schema: &mut TemplateSchema) {
        let path = source_dir.join(ENV_EXAMPLE_FILE);
        if !self.fs.exists(&path) {
            return;
        }

        match self.fs.read_file(&path).map(String::from_utf8) {
            Ok(Ok(text)) => schema.env_config = parse_env_example(&text),
            Ok(Err(_)) => warn!(path = %path.display(), "Ignoring non UTF-8 env example"),
            Err(e) => warn!(path = %path.display(), error = %e, "Ignoring unreadable env example"),
        }
    }
}
