//! `stencil generate`: replay a persisted schema into a new project.

use stencil_core::prelude::*;
use tracing::instrument;

use super::{
    GenerateSummary, default_output_dir, ensure_output_free, print_generation, project_service,
};
use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(schema = %args.schema_file.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.project_name));

    output.info(&format!("Generating project from {}", args.schema_file.display()))?;
    output.field("Project name", &args.project_name)?;
    output.field("GitHub repo", &args.github_repo)?;
    output.field("Output dir", &output_dir.display().to_string())?;

    let service = project_service();
    let schema = service.load_schema(&args.schema_file)?;
    ensure_output_free(&output_dir, args.force || config.defaults.force)?;

    let variables = build_variables(&args, &config);

    let spinner = output.spinner("Generating files...");
    let result = service.generate(schema.clone(), variables, &output_dir);
    spinner.finish_and_clear();
    let report = result?;

    print_generation(&output, &report)?;
    output.json(&GenerateSummary::new(&schema, &report))?;
    Ok(())
}

/// Flags first, then config defaults, then the core defaults.
fn build_variables(args: &GenerateArgs, config: &AppConfig) -> TemplateVariables {
    let mut variables = TemplateVariables::new(&args.project_name, &args.github_repo);
    if let Some(author) = args.author.as_ref().or(config.defaults.author.as_ref()) {
        variables = variables.with_author(author);
    }
    if let Some(description) = &args.description {
        variables = variables.with_description(description);
    }
    for (key, value) in &args.vars {
        variables = variables.with_custom(key, value);
    }
    variables
}
