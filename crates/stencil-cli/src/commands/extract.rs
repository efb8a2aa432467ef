//! `stencil extract`: build a schema from a reference project.

use serde::Serialize;
use stencil_core::prelude::*;
use tracing::instrument;

use super::{format_size, project_service};
use crate::{cli::ExtractArgs, error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct ExtractSummary<'a> {
    output: String,
    #[serde(flatten)]
    schema: SchemaInfo,
    total_size_human: &'a str,
}

#[instrument(skip_all, fields(source = %args.source_dir.display(), template_type = %args.template_type))]
pub fn execute(args: ExtractArgs, output: OutputManager) -> CliResult<()> {
    let service = project_service();

    output.info(&format!(
        "Extracting {} template from {} to {}",
        args.template_type,
        args.source_dir.display(),
        args.output.display()
    ))?;

    let spinner = output.spinner("Reading reference project...");
    let result = service
        .extract(&ExtractOptions::new(&args.source_dir, &args.template_type))
        .and_then(|schema| {
            spinner.set_message("Writing schema...");
            service.save_schema(&schema, &args.output)?;
            Ok(schema)
        });
    spinner.finish_and_clear();
    let schema = result?;

    let size = format_size(schema.total_size());
    output.success(&format!(
        "Template extracted successfully to {}",
        args.output.display()
    ))?;
    output.print(&format!("Template type: {}", schema.template_type))?;
    output.print(&format!(
        "Found {} files ({} templated)",
        schema.files.len(),
        schema.templated_count()
    ))?;
    output.print(&format!("Total size: {size}"))?;

    output.json(&ExtractSummary {
        output: args.output.display().to_string(),
        schema: SchemaInfo::from(&schema),
        total_size_human: &size,
    })?;

    Ok(())
}
