//! Runtime variable binding for one generation call.

use std::collections::BTreeMap;

/// Name of the project variable.
pub const PROJECT_NAME: &str = "ProjectName";
/// Name of the repository variable (`owner/repo`).
pub const GITHUB_REPO: &str = "GitHubRepo";
pub const AUTHOR: &str = "Author";
pub const DESCRIPTION: &str = "Description";

/// Author used when the caller supplies none.
pub const DEFAULT_AUTHOR: &str = "Developer";

/// Concrete values substituted into templated files.
///
/// Created fresh for every generation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariables {
    pub project_name: String,
    pub github_repo: String,
    pub author: String,
    pub description: String,
    /// Extra values, addressable as `{{.Key}}`.
    pub custom: BTreeMap<String, String>,
}

impl TemplateVariables {
    /// Bind the two required values; author and description get defaults.
    pub fn new(project_name: impl Into<String>, github_repo: impl Into<String>) -> Self {
        let project_name = project_name.into();
        Self {
            description: default_description(&project_name),
            project_name,
            github_repo: github_repo.into(),
            author: DEFAULT_AUTHOR.into(),
            custom: BTreeMap::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Resolve a field reference such as `ProjectName` or a custom key.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            PROJECT_NAME => Some(&self.project_name),
            GITHUB_REPO => Some(&self.github_repo),
            AUTHOR => Some(&self.author),
            DESCRIPTION => Some(&self.description),
            other => self.custom.get(other).map(String::as_str),
        }
    }
}

/// `A {name} application`.
pub fn default_description(project_name: &str) -> String {
    format!("A {project_name} application")
}
