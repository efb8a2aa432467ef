//! Implementation of the `stencil list` command.

use super::{describe_variable, project_service};
use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let types = project_service().list_template_types();

    if args.format == ListFormat::Json || output.format() == OutputFormat::Json {
        // Bypasses the quiet/json gating so `--format json` works in pipes.
        let json = serde_json::to_string_pretty(&types)
            .with_cli_context(|| "Failed to serialise template types")?;
        println!("{json}");
        return Ok(());
    }

    match args.format {
        ListFormat::List => {
            for info in &types {
                output.print(&info.name)?;
            }
        }
        ListFormat::Table | ListFormat::Json => {
            output.header("Available template types:")?;
            output.print("")?;
            if types.is_empty() {
                output.warning("No templates registered")?;
                return Ok(());
            }
            for info in &types {
                output.print(&format!("• {}  {}", info.name, info.description))?;
                for (name, variable) in &info.variables {
                    output.print(&format!("    {}", describe_variable(name, variable)))?;
                }
            }
            output.print("")?;
            output.info("Use 'stencil new <type> <name> <repo>' to create a project")?;
        }
    }

    Ok(())
}
