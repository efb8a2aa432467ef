//! Rules shared by the built-in template types.

use std::collections::BTreeMap;

use stencil_core::domain::{Mapping, Variable};

/// Last `/`-separated segment.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether `dir` is one of the path's segments.
pub(crate) fn has_segment(path: &str, dir: &str) -> bool {
    path.split('/').any(|segment| segment == dir)
}

/// Skip rule used by the frontend and fullstack types.
///
/// Applied in order: anything under `.github` is kept; anything mentioning
/// `.git` is skipped; other dotfiles are skipped; `skip_dirs` segments are
/// skipped; `*.log` is skipped.
pub(crate) fn should_skip_common(path: &str, skip_dirs: &[&str]) -> bool {
    if path.contains(".github") {
        return false;
    }
    if path.contains(".git") {
        return true;
    }

    let base = base_name(path);
    if base.starts_with('.') {
        return true;
    }
    if skip_dirs.iter().any(|dir| has_segment(path, dir)) {
        return true;
    }

    base.ends_with(".log")
}

/// The four well-known variables every built-in type declares.
pub(crate) fn standard_variables(
    project_description: &str,
    default_description: &str,
) -> BTreeMap<String, Variable> {
    BTreeMap::from([
        (
            "ProjectName".to_string(),
            Variable::required(project_description),
        ),
        (
            "GitHubRepo".to_string(),
            Variable::required("GitHub repository (e.g., username/repo-name)"),
        ),
        (
            "Author".to_string(),
            Variable::optional("Project author name", "Developer"),
        ),
        (
            "Description".to_string(),
            Variable::optional("Project description", default_description),
        ),
    ])
}

pub(crate) fn mappings(pairs: &[(&str, &str)]) -> Vec<Mapping> {
    pairs
        .iter()
        .map(|(find, replace)| Mapping::new(*find, *replace))
        .collect()
}

/// Post-generate hook list.
pub(crate) fn post_generate(commands: &[&str]) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([(
        "post_generate".to_string(),
        commands.iter().map(|c| c.to_string()).collect(),
    )])
}
