//! Generator - replays a schema into a new project directory.
//!
//! A generator runs exactly once:
//!
//! ```text
//! Created ──validate──▶ Validated ──mkdir──▶ Writing ──▶ Done
//!    │                      │                  │
//!    └──────────────────────┴──────────────────┴──▶ Failed
//! ```
//!
//! The first failing file stops generation. Files already written stay on
//! disk; the caller removes the output directory before retrying.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainError, FileSpec, SchemaValidator, TemplatePipeline, TemplateSchema,
        TemplateVariables, codec,
    },
    error::StencilResult,
};

const OPERATION: &str = "generate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Created,
    Validated,
    Writing,
    Done,
    Failed,
}

impl GeneratorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Validated => "validated",
            Self::Writing => "writing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

/// Summary of a completed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub project_name: String,
    pub github_repo: String,
    pub files_written: usize,
    pub templated_files: usize,
}

pub struct Generator<'a> {
    schema: TemplateSchema,
    variables: TemplateVariables,
    output_dir: PathBuf,
    fs: &'a dyn Filesystem,
    pipeline: TemplatePipeline,
    state: GeneratorState,
}

impl<'a> Generator<'a> {
    /// Parse a serialized schema and bind the two required variables.
    ///
    /// Author defaults to `Developer`, description to `A {name} application`.
    pub fn new(
        schema_json: &str,
        output_dir: impl Into<PathBuf>,
        project_name: &str,
        github_repo: &str,
        fs: &'a dyn Filesystem,
    ) -> StencilResult<Self> {
        let schema = TemplateSchema::from_json(schema_json).map_err(|source| {
            ApplicationError::SchemaFormat {
                operation: OPERATION,
                source,
            }
        })?;

        Ok(Self::from_schema(
            schema,
            output_dir,
            TemplateVariables::new(project_name, github_repo),
            fs,
        ))
    }

    pub fn from_schema(
        schema: TemplateSchema,
        output_dir: impl Into<PathBuf>,
        variables: TemplateVariables,
        fs: &'a dyn Filesystem,
    ) -> Self {
        Self {
            schema,
            variables,
            output_dir: output_dir.into(),
            fs,
            pipeline: TemplatePipeline::new(),
            state: GeneratorState::Created,
        }
    }

    /// Replace the bound variables before generating.
    pub fn with_variables(mut self, variables: TemplateVariables) -> Self {
        self.variables = variables;
        self
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn schema(&self) -> &TemplateSchema {
        &self.schema
    }

    pub fn variables(&self) -> &TemplateVariables {
        &self.variables
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate, then write every file in schema order.
    #[instrument(
        skip_all,
        fields(
            schema = %self.schema.name,
            project = %self.variables.project_name,
            output = %self.output_dir.display()
        )
    )]
    pub fn generate(&mut self) -> StencilResult<GenerationReport> {
        if self.state != GeneratorState::Created {
            return Err(ApplicationError::InvalidState {
                operation: OPERATION,
                state: self.state.as_str(),
            }
            .into());
        }

        match self.run() {
            Ok(report) => {
                self.state = GeneratorState::Done;
                info!(files = report.files_written, "Generation completed");
                Ok(report)
            }
            Err(e) => {
                warn!(state = self.state.as_str(), error = %e, "Generation failed");
                self.state = GeneratorState::Failed;
                Err(e)
            }
        }
    }

    fn run(&mut self) -> StencilResult<GenerationReport> {
        SchemaValidator::validate(&self.schema)
            .and_then(|()| SchemaValidator::validate_variables(&self.schema, &self.variables))
            .map_err(|e| ApplicationError::rejected(OPERATION, e))?;
        self.state = GeneratorState::Validated;

        self.fs
            .create_dir_all(&self.output_dir)
            .map_err(|source| ApplicationError::OutputWrite {
                operation: OPERATION,
                path: self.output_dir.clone(),
                source,
            })?;
        self.state = GeneratorState::Writing;

        for file in &self.schema.files {
            self.write_file(file)?;
        }

        Ok(GenerationReport {
            output_dir: self.output_dir.clone(),
            project_name: self.variables.project_name.clone(),
            github_repo: self.variables.github_repo.clone(),
            files_written: self.schema.files.len(),
            templated_files: self.schema.templated_count(),
        })
    }

    fn write_file(&self, file: &FileSpec) -> StencilResult<()> {
        let failed = |source: DomainError| ApplicationError::FileProcessing {
            operation: OPERATION,
            path: file.path.clone(),
            source,
        };

        let dest = self.destination(&file.path).map_err(failed)?;

        if let Some(parent) = dest.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| ApplicationError::OutputWrite {
                    operation: OPERATION,
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let bytes = codec::decompress(&file.content, file.compressed).map_err(failed)?;

        let output = if file.template {
            let text = String::from_utf8(bytes).map_err(|_| {
                failed(DomainError::NonUtf8Template {
                    path: file.path.clone(),
                })
            })?;
            self.pipeline
                .render(&text, &file.mappings, &self.variables)
                .map_err(failed)?
                .into_bytes()
        } else {
            bytes
        };

        self.fs
            .write_file(&dest, &output)
            .map_err(|source| ApplicationError::OutputWrite {
                operation: OPERATION,
                path: dest.clone(),
                source,
            })?;

        debug!(path = %file.path, template = file.template, "Wrote file");
        Ok(())
    }

    /// Join a schema path onto the output root, refusing anything that
    /// would land outside it.
    fn destination(&self, relative: &str) -> Result<PathBuf, DomainError> {
        let path = Path::new(relative);
        if path.components().all(|c| matches!(c, Component::Normal(_))) {
            Ok(self.output_dir.join(path))
        } else {
            Err(DomainError::UnsafePath {
                path: relative.to_owned(),
            })
        }
    }
}
