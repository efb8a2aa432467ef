//! `stencil inspect`: summarise a schema file.

use serde::Serialize;
use stencil_core::prelude::*;

use super::{describe_variable, format_size, project_service};
use crate::{cli::InspectArgs, error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    info: &'a SchemaInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    env_config: Option<&'a [EnvVariable]>,
}

pub fn execute(args: InspectArgs, output: OutputManager) -> CliResult<()> {
    let schema = project_service().load_schema(&args.schema_file)?;
    let info = SchemaInfo::from(&schema);

    output.header(&format!("{} ({})", info.name, info.template_type))?;
    output.field("Version", &info.version)?;
    if !info.description.is_empty() {
        output.field("Description", &info.description)?;
    }
    output.field(
        "Files",
        &format!("{} ({} templated)", info.file_count, info.templated_count),
    )?;
    output.field("Total size", &format_size(info.total_size))?;
    output.field("Environment variables", &info.env_var_count.to_string())?;

    if !info.variables.is_empty() {
        output.print("")?;
        output.print("Variables:")?;
        for (name, variable) in &info.variables {
            output.print(&format!("  {}", describe_variable(name, variable)))?;
        }
    }

    if !info.hooks.is_empty() {
        output.print("")?;
        output.print("Hooks:")?;
        for (hook, commands) in &info.hooks {
            output.print(&format!("  {hook}:"))?;
            for command in commands {
                output.print(&format!("    {command}"))?;
            }
        }
    }

    if args.env {
        output.print("")?;
        output.print("Environment (.env.example):")?;
        if schema.env_config.is_empty() {
            output.print("  (none)")?;
        }
        let width = schema
            .env_config
            .iter()
            .map(|var| var.name.len())
            .max()
            .unwrap_or(0);
        for var in &schema.env_config {
            let line = if var.description.is_empty() {
                format!("  {:width$}  {}", var.name, var.example)
            } else {
                format!("  {:width$}  {}  # {}", var.name, var.example, var.description)
            };
            output.print(line.trim_end())?;
        }
    }

    output.json(&InspectReport {
        info: &info,
        env_config: args.env.then_some(schema.env_config.as_slice()),
    })?;
    Ok(())
}
