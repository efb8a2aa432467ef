//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stencil_core::domain::templating::is_identifier;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Extract template schemas from reference projects and generate new ones",
    long_about = "Stencil turns an existing reference project into a self-contained \
                  JSON template schema, then replays that schema into new projects \
                  with your project name, repository and author substituted in.",
    after_help = "EXAMPLES:\n\
        \x20 stencil new frontend \"My React App\" user/my-app\n\
        \x20 stencil extract ../api-template --type go-api -o api.json\n\
        \x20 stencil generate api.json --project-name \"My API\" --github-repo user/my-api\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract a template schema from a reference project.
    #[command(
        visible_alias = "x",
        about = "Extract a template schema from a source directory",
        after_help = "EXAMPLES:\n\
            \x20 stencil extract ../my-frontend --type frontend -o frontend-template.json\n\
            \x20 stencil extract ../my-api --type go-api -o api-template.json"
    )]
    Extract(ExtractArgs),

    /// Generate a project from a schema file.
    #[command(
        visible_alias = "g",
        about = "Generate a project from a template schema file",
        after_help = "EXAMPLES:\n\
            \x20 stencil generate frontend-template.json --project-name \"My App\" --github-repo user/my-app\n\
            \x20 stencil generate api.json --project-name api --github-repo user/api --var Port=8080"
    )]
    Generate(GenerateArgs),

    /// Extract from a configured reference project and generate in one step.
    #[command(
        visible_alias = "n",
        about = "Create a project from a configured reference project",
        after_help = "EXAMPLES:\n\
            \x20 stencil new frontend \"My React App\" user/my-app\n\
            \x20 stencil new go-api \"My API Service\" user/my-api ./services/api\n\
            \x20 stencil new --interactive"
    )]
    New(NewArgs),

    /// List available template types.
    #[command(
        visible_alias = "ls",
        about = "List available template types",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Show what a schema file contains.
    #[command(about = "Inspect a template schema file")]
    Inspect(InspectArgs),

    /// Check a schema file for structural and integrity problems.
    #[command(about = "Validate a template schema file")]
    Validate(ValidateArgs),

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # default location\n\
            \x20 stencil init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage reference projects and other settings.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config list\n\
            \x20 stencil config get references.frontend\n\
            \x20 stencil config add my-template /path/to/template \"My custom template\"\n\
            \x20 stencil config remove my-template"
    )]
    Config(ConfigCommands),
}

// ── extract ───────────────────────────────────────────────────────────────────

/// Arguments for `stencil extract`.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[arg(value_name = "SOURCE_DIR", help = "Reference project directory")]
    pub source_dir: PathBuf,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Template type (see `stencil list`)"
    )]
    pub template_type: String,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "template.json",
        help = "Output file for the extracted schema"
    )]
    pub output: PathBuf,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(value_name = "SCHEMA_FILE", help = "Template schema produced by `extract`")]
    pub schema_file: PathBuf,

    #[arg(long = "project-name", value_name = "NAME", help = "Name of the project")]
    pub project_name: String,

    #[arg(
        long = "github-repo",
        value_name = "REPO",
        help = "GitHub repository (e.g., username/repo-name)"
    )]
    pub github_repo: String,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: ./<kebab project name>)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long = "author", value_name = "AUTHOR", help = "Project author")]
    pub author: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    /// Extra template values, addressable as `{{.KEY}}`.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Extra template variable (repeatable)"
    )]
    pub vars: Vec<(String, String)>,

    /// Write into an existing directory.
    #[arg(long = "force", help = "Allow an existing output directory")]
    pub force: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stencil new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(
        value_name = "TYPE",
        required_unless_present = "interactive",
        help = "Template type with a configured reference project"
    )]
    pub template_type: Option<String>,

    #[arg(
        value_name = "NAME",
        required_unless_present = "interactive",
        help = "Project name"
    )]
    pub name: Option<String>,

    #[arg(
        value_name = "REPO",
        required_unless_present = "interactive",
        help = "GitHub repository (e.g., username/repo-name)"
    )]
    pub repo: Option<String>,

    #[arg(
        value_name = "OUTPUT_DIR",
        help = "Output directory (default: ./<kebab name>)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(short = 'i', long = "interactive", help = "Prompt for type, name and repository")]
    pub interactive: bool,

    #[arg(long = "force", help = "Allow an existing output directory")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table with variables.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── inspect / validate ────────────────────────────────────────────────────────

/// Arguments for `stencil inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,

    #[arg(long = "env", help = "Also list environment variables from .env.example")]
    pub env: bool,
}

/// Arguments for `stencil validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author` or `references.frontend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Add or replace a reference project.
    Add {
        /// Template type name.
        template_type: String,
        /// Reference project directory.
        path: PathBuf,
        /// Short description.
        description: String,
    },
    /// Remove a reference project.
    Remove {
        /// Template type name.
        template_type: String,
    },
}

// ── value parsers ─────────────────────────────────────────────────────────────

/// Parse `KEY=VALUE`. The value may itself contain `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if !is_identifier(key) {
        return Err(format!("invalid variable name '{key}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
