//! Template schema model.
//!
//! A [`TemplateSchema`] is the durable artifact produced by extraction and
//! consumed by generation. It owns every file's content; nothing in it points
//! back at the source tree it was extracted from.
//!
//! The JSON representation uses the same snake_case keys as the field names
//! and is the only interchange format between the two phases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracted, self-contained project template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSchema {
    pub name: String,

    /// Template type tag, e.g. `frontend`.
    #[serde(rename = "type")]
    pub template_type: String,

    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Variable declarations keyed by variable name.
    ///
    /// `None` only for hand-written or damaged schemas; validation rejects it.
    #[serde(default)]
    pub variables: Option<BTreeMap<String, Variable>>,

    /// Files in directory-walk order.
    #[serde(default)]
    pub files: Vec<FileSpec>,

    /// Lifecycle hook name to shell commands. Recorded, never executed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<BTreeMap<String, Vec<String>>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_config: Vec<EnvVariable>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

impl TemplateSchema {
    /// Create an empty schema with the given identity.
    pub fn new(
        name: impl Into<String>,
        template_type: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template_type: template_type.into(),
            version: version.into(),
            description: String::new(),
            variables: Some(BTreeMap::new()),
            files: Vec::new(),
            hooks: None,
            env_config: Vec::new(),
            hash: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_variables(mut self, variables: BTreeMap<String, Variable>) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn with_hooks(mut self, hooks: BTreeMap<String, Vec<String>>) -> Self {
        self.hooks = (!hooks.is_empty()).then_some(hooks);
        self
    }

    pub fn add_file(&mut self, file: FileSpec) {
        self.files.push(file);
    }

    /// Parse a schema from its JSON form.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Number of files marked for templating.
    pub fn templated_count(&self) -> usize {
        self.files.iter().filter(|f| f.template).count()
    }

    /// Sum of original (uncompressed) file sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Look up a declared variable.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.as_ref().and_then(|vars| vars.get(name))
    }

    pub fn file(&self, path: &str) -> Option<&FileSpec> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// Declaration of a substitution variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Type tag. Only `string` is produced today.
    #[serde(rename = "type")]
    pub var_type: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default)]
    pub description: String,
}

impl Variable {
    /// A required string variable.
    pub fn required(description: impl Into<String>) -> Self {
        Self {
            var_type: "string".into(),
            required: true,
            default: None,
            description: description.into(),
        }
    }

    /// An optional string variable with a default value.
    pub fn optional(description: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            var_type: "string".into(),
            required: false,
            default: Some(default.into()),
            description: description.into(),
        }
    }

    /// `true` when a non-empty default is declared.
    pub fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// One file of the template with its embedded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// Slash-separated path relative to the project root.
    pub path: String,

    /// Whether this file goes through variable substitution.
    #[serde(default)]
    pub template: bool,

    /// Verbatim text, or base64(gzip(bytes)) when `compressed` is set.
    #[serde(default)]
    pub content: String,

    /// Original size in bytes.
    #[serde(default)]
    pub size: u64,

    /// SHA-256 hex of the uncompressed bytes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub compressed: bool,

    /// Literal find/replace pairs applied before template expansion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<Mapping>,
}

/// A literal substring replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub find: String,
    pub replace: String,
}

impl Mapping {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// An environment variable documented in `.env.example`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TemplateSchema {
        let mut vars = BTreeMap::new();
        vars.insert("ProjectName".into(), Variable::required("Name of the project"));
        vars.insert(
            "Author".into(),
            Variable::optional("Project author name", "Developer"),
        );

        let mut schema = TemplateSchema::new("demo", "frontend", "1.0.0")
            .with_description("demo template")
            .with_variables(vars);
        schema.add_file(FileSpec {
            path: "README.md".into(),
            template: true,
            content: "# Demo".into(),
            size: 6,
            hash: "abc".into(),
            compressed: false,
            mappings: vec![Mapping::new("# Demo", "# {{.ProjectName}}")],
        });
        schema.add_file(FileSpec {
            path: "logo.png".into(),
            template: false,
            content: "H4sI".into(),
            size: 1,
            hash: "def".into(),
            compressed: true,
            mappings: vec![],
        });
        schema
    }

    #[test]
    fn json_uses_snake_case_keys() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"frontend\""));
        assert!(json.contains("\"find\": \"# Demo\""));
        assert!(json.contains("\"compressed\": true"));
        // empty optional collections are omitted
        assert!(!json.contains("env_config"));
        assert!(!json.contains("hooks"));
    }

    #[test]
    fn json_round_trip_preserves_schema() {
        let schema = sample();
        let parsed = TemplateSchema::from_json(&schema.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn null_variables_deserialize_as_none() {
        let json = r#"{"name":"x","type":"t","version":"1","variables":null,"files":[]}"#;
        let schema = TemplateSchema::from_json(json).unwrap();
        assert!(schema.variables.is_none());
    }

    #[test]
    fn counts_and_sizes() {
        let schema = sample();
        assert_eq!(schema.templated_count(), 1);
        assert_eq!(schema.total_size(), 7);
        assert!(schema.file("logo.png").is_some());
        assert!(schema.variable("Author").unwrap().has_default());
    }

    #[test]
    fn empty_hooks_are_dropped() {
        let schema = TemplateSchema::new("a", "b", "c").with_hooks(BTreeMap::new());
        assert!(schema.hooks.is_none());
    }
}
