//! `stencil config`: inspect settings and manage reference projects.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, ReferenceProject},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = AppConfig::resolve_path(global.config.as_ref());

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or_else(|| CliError::invalid(format!("Unknown config key: '{key}'")))?;
            let rendered = match value {
                serde_json::Value::String(s) => s,
                other => serde_json::to_string_pretty(&other)
                    .with_cli_context(|| format!("Failed to render '{key}'"))?,
            };
            output.print(&rendered)?;
        }

        ConfigCommands::List => list(&config, &output)?,

        ConfigCommands::Path => {
            output.print(&config_path.display().to_string())?;
        }

        ConfigCommands::Add {
            template_type,
            path,
            description,
        } => {
            add_reference(&mut config, &template_type, path.clone(), description)?;
            config.save(&config_path)?;
            output.success(&format!(
                "Added reference project '{template_type}' at {}",
                path.display()
            ))?;
        }

        ConfigCommands::Remove { template_type } => {
            remove_reference(&mut config, &template_type)?;
            config.save(&config_path)?;
            output.success(&format!("Removed reference project '{template_type}'"))?;
        }
    }

    Ok(())
}

fn list(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if config.references.is_empty() {
        output.warning("No reference projects configured")?;
    } else {
        output.header("Configured reference projects:")?;
        output.print("")?;
        for (name, reference) in &config.references {
            output.print(&format!("• {name}"))?;
            output.print(&format!("  Path: {}", reference.path.display()))?;
            output.print(&format!("  Description: {}", reference.description))?;
            if let Some(version) = &reference.version {
                output.print(&format!("  Version: {version}"))?;
            }
            output.print("")?;
        }
    }

    output.header("Defaults:")?;
    output.print(&format!(
        "  author: {}",
        config.defaults.author.as_deref().unwrap_or("(unset)")
    ))?;
    output.print(&format!("  force: {}", config.defaults.force))?;
    output.print(&format!("  output.format: {}", config.output.format))?;
    output.print(&format!("  output.no_color: {}", config.output.no_color))?;
    Ok(())
}

fn add_reference(
    config: &mut AppConfig,
    template_type: &str,
    path: PathBuf,
    description: String,
) -> CliResult<()> {
    if template_type.trim().is_empty() {
        return Err(CliError::invalid("template type is required"));
    }
    config
        .references
        .insert(template_type.to_string(), ReferenceProject::new(path, description));
    Ok(())
}

fn remove_reference(config: &mut AppConfig, template_type: &str) -> CliResult<()> {
    config
        .references
        .remove(template_type)
        .map(|_| ())
        .ok_or_else(|| CliError::ReferenceNotConfigured {
            template_type: template_type.to_string(),
            available: config.references.keys().cloned().collect(),
        })
}

// ── tests ─────────────────────────────────────────────────────────────────────
