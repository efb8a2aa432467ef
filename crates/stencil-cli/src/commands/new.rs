//! `stencil new`: extract a configured reference project and generate from
//! it in one step, without persisting the schema.

use std::path::{Path, PathBuf};

use stencil_core::prelude::*;
use tracing::{debug, instrument};

use super::{
    GenerateSummary, default_output_dir, ensure_output_free, post_generate_hooks, project_service,
};
use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What to create, from positionals or prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NewRequest {
    template_type: String,
    name: String,
    repo: String,
}

#[instrument(skip_all, fields(interactive = args.interactive))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = if args.interactive {
        prompt(&config)?
    } else {
        NewRequest::from_args(&args)?
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&request.name));
    let reference = resolve_reference(&config, &request.template_type)?;
    ensure_output_free(&output_dir, args.force || config.defaults.force)?;

    output.header(&format!("Creating {} project...", request.template_type))?;
    output.field("Reference", &reference.display().to_string())?;
    output.field("Name", &request.name)?;
    output.field("Repo", &request.repo)?;
    output.field("Output", &output_dir.display().to_string())?;
    output.print("")?;

    let service = project_service();
    let mut variables = TemplateVariables::new(&request.name, &request.repo);
    if let Some(author) = &config.defaults.author {
        variables = variables.with_author(author);
    }

    let spinner = output.spinner("Extracting reference project...");
    let result = service
        .extract(&ExtractOptions::new(&reference, &request.template_type))
        .and_then(|schema| {
            debug!(files = schema.files.len(), "Schema extracted, generating");
            spinner.set_message("Generating files...");
            let report = service.generate(schema.clone(), variables, &output_dir)?;
            Ok((schema, report))
        });
    spinner.finish_and_clear();
    let (schema, report) = result?;

    output.success("Project created successfully!")?;
    output.field("Files processed", &report.files_written.to_string())?;
    output.field("Templated files", &report.templated_files.to_string())?;
    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(&output_dir, &schema) {
        output.print(&format!("  {step}"))?;
    }

    output.json(&GenerateSummary::new(&schema, &report))?;
    Ok(())
}

impl NewRequest {
    fn from_args(args: &NewArgs) -> CliResult<Self> {
        let required = |value: &Option<String>, what: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| CliError::invalid(format!("{what} is required")))
        };
        Ok(Self {
            template_type: required(&args.template_type, "template type")?,
            name: required(&args.name, "project name")?,
            repo: required(&args.repo, "GitHub repository")?,
        })
    }
}

/// The configured reference directory, which must exist.
fn resolve_reference(config: &AppConfig, template_type: &str) -> CliResult<PathBuf> {
    let not_configured = || CliError::ReferenceNotConfigured {
        template_type: template_type.to_string(),
        available: config.references.keys().cloned().collect(),
    };
    let path = config
        .reference_path(template_type)
        .ok_or_else(not_configured)?;
    if !path.is_dir() {
        return Err(CliError::ReferenceMissing {
            template_type: template_type.to_string(),
            path,
        });
    }
    Ok(path)
}

/// `cd <dir>` followed by the schema's post-generate hooks.
fn next_steps(output_dir: &Path, schema: &TemplateSchema) -> Vec<String> {
    let dir = output_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_dir.display().to_string());

    std::iter::once(format!("cd {dir}"))
        .chain(post_generate_hooks(schema))
        .collect()
}

#[cfg(feature = "interactive")]
fn prompt(config: &AppConfig) -> CliResult<NewRequest> {
    use dialoguer::{Input, Select};

    if config.references.is_empty() {
        return Err(CliError::ConfigError {
            message: "no reference projects configured".into(),
            source: None,
        });
    }

    let types: Vec<&String> = config.references.keys().collect();
    let labels: Vec<String> = config
        .references
        .iter()
        .map(|(name, reference)| format!("{name} - {}", reference.description))
        .collect();

    let choice = Select::new()
        .with_prompt("Select template type")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?
        .ok_or(CliError::Cancelled)?;

    let name: String = Input::new()
        .with_prompt("Project name")
        .interact_text()
        .map_err(prompt_error)?;
    let repo: String = Input::new()
        .with_prompt("GitHub repo (user/repo-name)")
        .interact_text()
        .map_err(prompt_error)?;

    Ok(NewRequest {
        template_type: types[choice].clone(),
        name,
        repo,
    })
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: format!("Prompt failed: {err}"),
        source: std::io::Error::other(err.to_string()),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt(_config: &AppConfig) -> CliResult<NewRequest> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
