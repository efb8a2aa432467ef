//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STENCIL_` prefix, `__` between nested keys
//!    (e.g. `STENCIL_DEFAULTS__AUTHOR`)
//! 3. Config file (`--config FILE` or the platform config dir)
//! 4. Built-in defaults
//!
//! The built-in reference projects only apply while no config file exists.
//! Once a file is present its `references` table is authoritative.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template type name → reference project directory.
    #[serde(default)]
    pub references: BTreeMap<String, ReferenceProject>,
    /// Default values for generated projects.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// A reference project a schema is extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProject {
    pub path: PathBuf,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Author used when `--author` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Write into existing output directories without `--force`.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "auto".into()
}

impl ReferenceProject {
    pub fn new(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            version: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            references: default_references(),
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Sibling reference projects, relative to the working directory.
pub fn default_references() -> BTreeMap<String, ReferenceProject> {
    BTreeMap::from([
        (
            "frontend".to_string(),
            ReferenceProject::new(
                "../frontend-template",
                "React + TypeScript + Vite frontend template",
            ),
        ),
        (
            "go-api".to_string(),
            ReferenceProject::new(
                "../api-template",
                "Go API with Gin + PostgreSQL + Clean Architecture",
            ),
        ),
        (
            "fullstack".to_string(),
            ReferenceProject::new("../fullstack-template", "Go API + React fullstack template"),
        ),
    ])
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given. Without it the platform default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        let file_exists = path.is_file();

        if config_file.is_some() && !file_exists {
            anyhow::bail!("configuration file {} does not exist", path.display());
        }

        let mut base = Self::default();
        if file_exists {
            base.references.clear();
        }
        debug!(path = %path.display(), file_exists, "Loading configuration");

        Config::builder()
            .add_source(Config::try_from(&base).context("Failed to encode default configuration")?)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("STENCIL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file `load` reads and `save` writes.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.stencil.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Serialise as TOML and write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialise configuration")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// The reference project for a template type, relative paths resolved
    /// against the working directory.
    pub fn reference_path(&self, template_type: &str) -> Option<PathBuf> {
        let reference = self.references.get(template_type)?;
        if reference.path.is_absolute() {
            return Some(reference.path.clone());
        }
        let cwd = std::env::current_dir().ok()?;
        Some(cwd.join(&reference.path))
    }

    /// Look up a dotted key such as `defaults.author` or `references.frontend`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for segment in key.split('.') {
            value = value.get_mut(segment)?.take();
        }
        Some(value)
    }
}
