//! Go API backend with a React frontend under `frontend/`.

use std::collections::BTreeMap;

use stencil_core::{
    application::ports::TemplateType,
    domain::{Mapping, Variable},
};

use super::common::{
    base_name, has_segment, mappings, post_generate, should_skip_common, standard_variables,
};

const TEMPLATED_FILES: &[&str] = &[
    "go.mod",
    "README.md",
    "docker-compose.yml",
    "cmd/api/main.go",
    "internal/shared/config/config.go",
    "Makefile",
    "frontend/package.json",
    "frontend/index.html",
    "frontend/src/config/app.ts",
];

/// Dotfiles kept even though the common rule drops dotfiles.
const KEPT_DOTFILES: &[&str] = &[
    ".dockerignore",
    ".gitignore",
    ".golangci.yml",
    ".golangci.yaml",
    ".env.example",
];

const SKIP_DIRS: &[&str] = &["vendor", "bin", "tmp", "coverage", "dist", "build"];

const IMPORT_PATH: (&str, &str) = (
    "\"github.com/acheevo/fullstack-template/",
    "\"github.com/{{.GitHubRepo}}/",
);

#[derive(Debug, Clone, Copy, Default)]
pub struct FullstackTemplate;

impl TemplateType for FullstackTemplate {
    fn name(&self) -> &str {
        "fullstack"
    }

    fn schema_name(&self) -> &str {
        "fullstack-template"
    }

    fn description(&self) -> &str {
        "Fullstack template with Go API backend and React frontend"
    }

    fn hooks(&self) -> BTreeMap<String, Vec<String>> {
        post_generate(&["go mod tidy", "cd frontend && npm install"])
    }

    fn get_mappings(&self, relative_path: &str) -> Vec<Mapping> {
        match relative_path {
            "go.mod" => mappings(&[(
                "module github.com/acheevo/fullstack-template",
                "module github.com/{{.GitHubRepo}}",
            )]),
            "README.md" => mappings(&[
                ("# Fullstack Template", "# {{.ProjectName}}"),
                ("# Go + React Fullstack Template", "# {{.ProjectName}}"),
                (
                    "git clone https://github.com/acheevo/fullstack-template.git",
                    "git clone https://github.com/{{.GitHubRepo}}.git",
                ),
                ("cd fullstack-template", "cd {{.ProjectName | kebab}}"),
            ]),
            "docker-compose.yml" => mappings(&[
                ("fullstack-template", "{{.ProjectName | kebab}}"),
                ("fullstack_template", "{{.ProjectName | snake}}"),
            ]),
            "internal/shared/config/config.go" => mappings(&[
                (
                    "ServiceName    string `envconfig:\"SERVICE_NAME\" default:\"fullstack-template\"`",
                    "ServiceName    string `envconfig:\"SERVICE_NAME\" default:\"{{.ProjectName | kebab}}\"`",
                ),
                (
                    "DBName            string `envconfig:\"DB_NAME\" default:\"fullstack_template\"`",
                    "DBName            string `envconfig:\"DB_NAME\" default:\"{{.ProjectName | snake}}\"`",
                ),
            ]),
            "Makefile" => mappings(&[
                (
                    "docker build -t fullstack-template",
                    "docker build -t {{.ProjectName | kebab}}",
                ),
                (
                    "docker rmi fullstack-template",
                    "docker rmi {{.ProjectName | kebab}}",
                ),
            ]),
            "frontend/package.json" => mappings(&[
                (
                    "\"name\": \"fullstack-template\"",
                    "\"name\": \"{{.ProjectName | kebab}}\"",
                ),
                (
                    "\"description\": \"Fullstack template\"",
                    "\"description\": \"{{.Description}}\"",
                ),
            ]),
            "frontend/index.html" => mappings(&[(
                "<title>Fullstack Template</title>",
                "<title>{{.ProjectName}}</title>",
            )]),
            "frontend/src/config/app.ts" => mappings(&[(
                "APP_NAME: 'Fullstack Template'",
                "APP_NAME: '{{.ProjectName}}'",
            )]),
            path if path.ends_with(".go") => mappings(&[IMPORT_PATH]),
            _ => Vec::new(),
        }
    }

    fn get_variables(&self) -> BTreeMap<String, Variable> {
        standard_variables(
            "Name of the fullstack project",
            "A fullstack application with Go API and React frontend",
        )
    }

    fn should_template(&self, relative_path: &str) -> bool {
        TEMPLATED_FILES.contains(&relative_path) || relative_path.ends_with(".go")
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        let base = base_name(relative_path);

        if relative_path.contains("node_modules") {
            return true;
        }
        // compiled server binary
        if base == "api" {
            return true;
        }
        if KEPT_DOTFILES.contains(&base) || has_segment(relative_path, ".claude") {
            return false;
        }

        should_skip_common(relative_path, SKIP_DIRS)
    }
}
