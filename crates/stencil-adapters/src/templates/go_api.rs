//! Go REST API projects (Gin + PostgreSQL).

use std::collections::BTreeMap;

use stencil_core::{
    application::ports::TemplateType,
    domain::{Mapping, Variable},
};

use super::common::{base_name, has_segment, mappings, post_generate, standard_variables};

const TEMPLATED_FILES: &[&str] = &[
    "go.mod",
    "README.md",
    "docker-compose.yml",
    "cmd/api/main.go",
    "internal/shared/config/config.go",
    "Makefile",
];

const SKIP_DIRS: &[&str] = &[".git", "vendor", "bin", "tmp"];

const SKIP_FILES: &[&str] = &[".DS_Store", ".env", "coverage.out"];

const IMPORT_PATH: (&str, &str) = (
    "\"github.com/acheevo/api-template/",
    "\"github.com/{{.GitHubRepo}}/",
);

#[derive(Debug, Clone, Copy, Default)]
pub struct GoApiTemplate;

impl TemplateType for GoApiTemplate {
    fn name(&self) -> &str {
        "go-api"
    }

    fn schema_name(&self) -> &str {
        "go-api-template"
    }

    fn description(&self) -> &str {
        "Go REST API template with Gin and PostgreSQL"
    }

    fn hooks(&self) -> BTreeMap<String, Vec<String>> {
        post_generate(&["go mod tidy", "go build"])
    }

    fn get_mappings(&self, relative_path: &str) -> Vec<Mapping> {
        match relative_path {
            "go.mod" => mappings(&[(
                "module github.com/acheevo/api-template",
                "module github.com/{{.GitHubRepo}}",
            )]),
            "README.md" => mappings(&[
                ("# Go API Template", "# {{.ProjectName}}"),
                (
                    "git clone https://github.com/acheevo/api-template.git",
                    "git clone https://github.com/{{.GitHubRepo}}.git",
                ),
                ("cd api-template", "cd {{.ProjectName | kebab}}"),
            ]),
            "docker-compose.yml" => mappings(&[("api-template", "{{.ProjectName | kebab}}")]),
            "internal/shared/config/config.go" => mappings(&[
                (
                    "ServiceName    string `envconfig:\"SERVICE_NAME\" default:\"api-template\"`",
                    "ServiceName    string `envconfig:\"SERVICE_NAME\" default:\"{{.ProjectName | kebab}}\"`",
                ),
                (
                    "DBName            string `envconfig:\"DB_NAME\" default:\"api_template\"`",
                    "DBName            string `envconfig:\"DB_NAME\" default:\"{{.ProjectName | lower}}\"`",
                ),
            ]),
            "Makefile" => mappings(&[
                (
                    "docker build -t api-template .",
                    "docker build -t {{.ProjectName | kebab}} .",
                ),
                ("docker rmi api-template", "docker rmi {{.ProjectName | kebab}}"),
            ]),
            // cmd/api/main.go and every other Go source
            path if path.ends_with(".go") => mappings(&[IMPORT_PATH]),
            _ => Vec::new(),
        }
    }

    fn get_variables(&self) -> BTreeMap<String, Variable> {
        standard_variables("Name of the API project", "A Go REST API application")
    }

    fn should_template(&self, relative_path: &str) -> bool {
        TEMPLATED_FILES.contains(&relative_path) || relative_path.ends_with(".go")
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        let base = base_name(relative_path);
        SKIP_DIRS.iter().any(|dir| has_segment(relative_path, dir))
            || SKIP_FILES.contains(&base)
            || base.ends_with(".log")
    }
}
