//! React + TypeScript frontend projects.

use std::collections::BTreeMap;

use stencil_core::{
    application::ports::TemplateType,
    domain::{Mapping, Variable},
};

use super::common::{mappings, post_generate, should_skip_common, standard_variables};

const TEMPLATED_FILES: &[&str] = &["package.json", "README.md", "src/config/app.ts", "index.html"];

const SKIP_DIRS: &[&str] = &["node_modules", "dist", "build", "coverage"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FrontendTemplate;

impl TemplateType for FrontendTemplate {
    fn name(&self) -> &str {
        "frontend"
    }

    fn schema_name(&self) -> &str {
        "frontend-react-template"
    }

    fn description(&self) -> &str {
        "React TypeScript frontend template with Tailwind CSS"
    }

    fn hooks(&self) -> BTreeMap<String, Vec<String>> {
        post_generate(&["npm install"])
    }

    fn get_mappings(&self, relative_path: &str) -> Vec<Mapping> {
        match relative_path {
            "package.json" => mappings(&[
                ("\"frontend-template\"", "\"{{.ProjectName}}\""),
                ("\"Your Name\"", "\"{{.Author}}\""),
            ]),
            "src/config/app.ts" => mappings(&[
                ("'Frontend Template'", "'{{.ProjectName}}'"),
                ("'Your Name'", "'{{.Author}}'"),
            ]),
            "README.md" => mappings(&[
                ("# Frontend Template", "# {{.ProjectName}}"),
                (
                    "https://github.com/your-username/frontend-template",
                    "https://github.com/{{.GitHubRepo}}",
                ),
            ]),
            "index.html" => mappings(&[(
                "<title>Frontend Template</title>",
                "<title>{{.ProjectName}}</title>",
            )]),
            _ => Vec::new(),
        }
    }

    fn get_variables(&self) -> BTreeMap<String, Variable> {
        standard_variables("Name of the project", "A React TypeScript application")
    }

    fn should_template(&self, relative_path: &str) -> bool {
        TEMPLATED_FILES.contains(&relative_path)
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        should_skip_common(relative_path, SKIP_DIRS)
    }
}
