//! `stencil validate`: structural and integrity check of a schema file.

use stencil_core::prelude::*;

use super::project_service;
use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let schema = project_service().load_schema(&args.schema_file)?;

    SchemaValidator::validate(&schema).map_err(|e| CliError::Core(e.into()))?;

    output.success(&format!(
        "{} is a valid {} schema ({} files)",
        args.schema_file.display(),
        schema.template_type,
        schema.files.len()
    ))?;
    Ok(())
}
