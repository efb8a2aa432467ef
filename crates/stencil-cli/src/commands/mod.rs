//! Command handlers, one module per subcommand.
//!
//! Handlers receive parsed arguments and an [`OutputManager`], call into
//! `stencil-core` through the adapters, and return [`CliResult`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use stencil_adapters::{LocalFilesystem, builtin_registry};
use stencil_core::domain::templating::funcs::kebab;
use stencil_core::prelude::*;

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub mod completions;
pub mod config;
pub mod extract;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod list;
pub mod new;
pub mod validate;

/// Project workflow over the local filesystem and the built-in types.
pub(crate) fn project_service() -> ProjectService {
    ProjectService::new(builtin_registry(), Box::new(LocalFilesystem::new()))
}

/// `./<kebab(name)>`.
pub(crate) fn default_output_dir(project_name: &str) -> PathBuf {
    PathBuf::from(".").join(kebab(project_name))
}

/// Refuse to write into an existing directory unless forced.
pub(crate) fn ensure_output_free(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ProjectExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Human-readable size with a 1024 base and one decimal, e.g. `1.5 KB`.
pub(crate) fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < PREFIXES.len() - 1 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Machine-readable outcome of `generate` and `new`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateSummary<'a> {
    pub schema: &'a str,
    pub template_type: &'a str,
    pub output_dir: String,
    pub project_name: &'a str,
    pub github_repo: &'a str,
    pub files_written: usize,
    pub templated_files: usize,
    pub hooks: Vec<String>,
}

impl<'a> GenerateSummary<'a> {
    pub fn new(schema: &'a TemplateSchema, report: &'a GenerationReport) -> Self {
        Self {
            schema: &schema.name,
            template_type: &schema.template_type,
            output_dir: report.output_dir.display().to_string(),
            project_name: &report.project_name,
            github_repo: &report.github_repo,
            files_written: report.files_written,
            templated_files: report.templated_files,
            hooks: post_generate_hooks(schema),
        }
    }
}

pub(crate) fn post_generate_hooks(schema: &TemplateSchema) -> Vec<String> {
    schema
        .hooks
        .as_ref()
        .and_then(|hooks| hooks.get("post_generate"))
        .cloned()
        .unwrap_or_default()
}

/// `Name (required): description` or `Name = default: description`.
pub(crate) fn describe_variable(name: &str, variable: &Variable) -> String {
    let head = match &variable.default {
        _ if variable.required => format!("{name} (required)"),
        Some(default) => format!("{name} = {default:?}"),
        None => name.to_string(),
    };
    if variable.description.is_empty() {
        head
    } else {
        format!("{head}: {}", variable.description)
    }
}

/// The generation summary lines shared by `generate` and `new`.
pub(crate) fn print_generation(output: &OutputManager, report: &GenerationReport) -> CliResult<()> {
    output.success("Project generated successfully!")?;
    output.field("Location", &report.output_dir.display().to_string())?;
    output.field("Project", &report.project_name)?;
    output.field("Repository", &report.github_repo)?;
    output.field("Files processed", &report.files_written.to_string())?;
    output.field("Templated files", &report.templated_files.to_string())?;
    Ok(())
}
