//! Templating pipeline for files marked `template: true`.
//!
//! Files may legally contain `{{ ... }}` of their own (Go templates, Helm
//! charts, Handlebars snippets in docs). Only the fixed vocabulary of
//! substitution expressions is evaluated; every other delimiter pair must
//! survive byte-for-byte. This is a two-pass lexical protection scheme, not
//! a parser of the destination language:
//!
//! 1. apply the file's mappings in order (plain substring replace)
//! 2. swap each known substitution expression for a placeholder
//! 3. swap every remaining `{{` / `}}` for a sentinel
//! 4. restore the placeholders to real expressions
//! 5. parse and execute the result
//! 6. restore the sentinels to `{{` / `}}`
//!
//! Placeholders and sentinels embed a random UUID so they cannot collide with
//! file content.

pub mod engine;
pub mod funcs;

use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    schema::Mapping,
    variables::{self, TemplateVariables},
};

pub use engine::{Template, is_identifier};

/// Renders templated file content.
#[derive(Debug, Clone)]
pub struct TemplatePipeline {
    left: String,
    right: String,
    placeholder_prefix: String,
}

impl TemplatePipeline {
    pub fn new() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self {
            left: format!("__STENCIL_{token}_LBRACE__"),
            right: format!("__STENCIL_{token}_RBRACE__"),
            placeholder_prefix: format!("__STENCIL_{token}_EXPR_"),
        }
    }

    /// Run the full pipeline over one file's text.
    pub fn render(
        &self,
        content: &str,
        mappings: &[Mapping],
        vars: &TemplateVariables,
    ) -> Result<String, DomainError> {
        let mapped = apply_mappings(content, mappings);
        let escaped = self.escape(&mapped, vars);
        let executed = Template::parse(&escaped)?.execute(vars)?;
        Ok(self.unescape(&executed))
    }

    /// Steps 2-4: leave only known expressions as live template syntax.
    fn escape(&self, content: &str, vars: &TemplateVariables) -> String {
        let expressions = protected_expressions(vars);
        let placeholders: Vec<String> = (0..expressions.len())
            .map(|i| format!("{}{i}__", self.placeholder_prefix))
            .collect();

        let mut out = content.to_owned();
        for (expr, placeholder) in expressions.iter().zip(&placeholders) {
            out = out.replace(expr.as_str(), placeholder);
        }

        out = out.replace("{{", &self.left).replace("}}", &self.right);

        for (expr, placeholder) in expressions.iter().zip(&placeholders) {
            out = out.replace(placeholder.as_str(), expr);
        }
        out
    }

    fn unescape(&self, content: &str) -> String {
        content.replace(&self.left, "{{").replace(&self.right, "}}")
    }
}

impl Default for TemplatePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply mappings in declaration order.
pub fn apply_mappings(content: &str, mappings: &[Mapping]) -> String {
    mappings
        .iter()
        .filter(|m| !m.find.is_empty())
        .fold(content.to_owned(), |acc, m| acc.replace(&m.find, &m.replace))
}

/// The expressions evaluated during generation.
///
/// The four well-known fields, every case transform of the project name, and
/// each bound custom key.
pub fn protected_expressions(vars: &TemplateVariables) -> Vec<String> {
    let mut exprs: Vec<String> = [
        variables::PROJECT_NAME,
        variables::GITHUB_REPO,
        variables::AUTHOR,
        variables::DESCRIPTION,
    ]
    .iter()
    .map(|field| format!("{{{{.{field}}}}}"))
    .collect();

    exprs.extend(
        funcs::FUNCTIONS
            .iter()
            .map(|func| format!("{{{{.{} | {func}}}}}", variables::PROJECT_NAME)),
    );

    exprs.extend(vars.custom.keys().map(|key| format!("{{{{.{key}}}}}")));
    exprs
}
