//! Minimal expression engine for substitution expressions.
//!
//! Supported action forms inside `{{ }}`:
//!
//! | Form                          | Meaning                         |
//! |-------------------------------|---------------------------------|
//! | `{{.Field}}`                  | value of `Field`                |
//! | `{{.Field \| f \| g}}`        | `g(f(Field))`                   |
//! | `{{f .Field}}`                | `f(Field)`, may be piped further |
//!
//! Everything outside an action is literal text.

use crate::domain::{error::DomainError, templating::funcs, variables::TemplateVariables};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Action(Pipeline),
}

/// A field reference followed by helper calls, applied left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pipeline {
    field: String,
    funcs: Vec<String>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, DomainError> {
        let mut nodes = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                nodes.push(Node::Text(rest[..start].to_owned()));
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or_else(|| DomainError::TemplateParse {
                reason: format!("unclosed action at byte {}", offset + start),
            })?;

            nodes.push(Node::Action(parse_pipeline(&after_open[..end])?));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            nodes.push(Node::Text(rest.to_owned()));
        }

        Ok(Self { nodes })
    }

    pub fn execute(&self, vars: &TemplateVariables) -> Result<String, DomainError> {
        let mut out = String::new();

        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Action(pipeline) => out.push_str(&pipeline.evaluate(vars)?),
            }
        }

        Ok(out)
    }
}

impl Pipeline {
    fn evaluate(&self, vars: &TemplateVariables) -> Result<String, DomainError> {
        let mut value = vars
            .get(&self.field)
            .ok_or_else(|| DomainError::TemplateExecute {
                reason: format!("can't evaluate field {}", self.field),
            })?
            .to_owned();

        for name in &self.funcs {
            value = funcs::apply(name, &value).ok_or_else(|| DomainError::TemplateExecute {
                reason: format!("function \"{name}\" not defined"),
            })?;
        }

        Ok(value)
    }
}

fn parse_pipeline(action: &str) -> Result<Pipeline, DomainError> {
    let mut commands = action.split('|').map(str::trim);

    let head: Vec<&str> = commands.next().unwrap_or_default().split_whitespace().collect();
    let (field, mut funcs) = match head.as_slice() {
        [field] => (parse_field(field)?, Vec::new()),
        [func, field] => (parse_field(field)?, vec![parse_func(func)?]),
        _ => {
            return Err(DomainError::TemplateParse {
                reason: format!("unsupported action {{{{{action}}}}}"),
            });
        }
    };

    for command in commands {
        funcs.push(parse_func(command)?);
    }

    Ok(Pipeline { field, funcs })
}

fn parse_field(token: &str) -> Result<String, DomainError> {
    let name = token
        .strip_prefix('.')
        .filter(|name| is_identifier(name))
        .ok_or_else(|| DomainError::TemplateParse {
            reason: format!("expected a field reference like .Name, found {token:?}"),
        })?;
    Ok(name.to_owned())
}

fn parse_func(token: &str) -> Result<String, DomainError> {
    if funcs::is_defined(token) {
        Ok(token.to_owned())
    } else {
        Err(DomainError::TemplateParse {
            reason: format!("function {token:?} not defined"),
        })
    }
}

/// Whether `name` can follow the dot in `{{.Name}}`: a letter or `_`, then
/// letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
