use crate::domain::{
    codec,
    error::DomainError,
    schema::TemplateSchema,
    variables::{self, TemplateVariables},
};

/// Centralized schema validation.
///
/// Checks run in a fixed order and the first violation wins, so a schema
/// with several problems always reports the same one.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Structural and integrity validation.
    ///
    /// 1. identity fields (name, type, version)
    /// 2. variables present, each with a type
    /// 3. at least one file
    /// 4. every file has a path and content
    /// 5. every recorded hash matches the decoded content
    ///
    /// Rules are applied one at a time across all files: a file missing its
    /// content is reported ahead of an earlier file whose hash is wrong.
    pub fn validate(schema: &TemplateSchema) -> Result<(), DomainError> {
        Self::validate_identity(schema)?;
        Self::validate_declarations(schema)?;

        if schema.files.is_empty() {
            return Err(DomainError::NoFiles);
        }

        for (index, file) in schema.files.iter().enumerate() {
            if file.path.is_empty() {
                return Err(DomainError::FileMissingPath { index });
            }
            if file.content.is_empty() {
                return Err(DomainError::FileMissingContent {
                    path: file.path.clone(),
                });
            }
        }

        Self::validate_integrity(schema)
    }

    /// Check the well-known variables are bound or defaulted.
    ///
    /// Only `ProjectName`, `GitHubRepo`, `Author` and `Description` are
    /// checked. Custom variables marked required are not enforced.
    pub fn validate_variables(
        schema: &TemplateSchema,
        bound: &TemplateVariables,
    ) -> Result<(), DomainError> {
        let Some(declared) = schema.variables.as_ref() else {
            return Ok(());
        };

        for (name, var) in declared.iter().filter(|(_, v)| v.required) {
            let value = match name.as_str() {
                variables::PROJECT_NAME => &bound.project_name,
                variables::GITHUB_REPO => &bound.github_repo,
                variables::AUTHOR => &bound.author,
                variables::DESCRIPTION => &bound.description,
                _ => continue,
            };

            if value.is_empty() && !var.has_default() {
                return Err(DomainError::RequiredVariable { name: name.clone() });
            }
        }

        Ok(())
    }

    fn validate_identity(schema: &TemplateSchema) -> Result<(), DomainError> {
        let fields = [
            ("name", &schema.name),
            ("type", &schema.template_type),
            ("version", &schema.version),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(DomainError::MissingIdentity { field }),
            None => Ok(()),
        }
    }

    fn validate_declarations(schema: &TemplateSchema) -> Result<(), DomainError> {
        let declared = schema
            .variables
            .as_ref()
            .ok_or(DomainError::MissingVariables)?;

        match declared.iter().find(|(_, v)| v.var_type.is_empty()) {
            Some((name, _)) => Err(DomainError::VariableMissingType { name: name.clone() }),
            None => Ok(()),
        }
    }

    fn validate_integrity(schema: &TemplateSchema) -> Result<(), DomainError> {
        for file in schema.files.iter().filter(|f| !f.hash.is_empty()) {
            let bytes = codec::decompress(&file.content, file.compressed).map_err(|e| {
                DomainError::UndecodableContent {
                    path: file.path.clone(),
                    reason: e.to_string(),
                }
            })?;

            let actual = codec::content_hash(&bytes);
            if actual != file.hash {
                return Err(DomainError::HashMismatch {
                    path: file.path.clone(),
                    expected: file.hash.clone(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::schema::{FileSpec, Variable};

    fn text_file(path: &str, content: &str) -> FileSpec {
        FileSpec {
            path: path.into(),
            template: false,
            content: content.into(),
            size: content.len() as u64,
            hash: codec::content_hash(content.as_bytes()),
            compressed: false,
            mappings: vec![],
        }
    }

    fn valid_schema() -> TemplateSchema {
        let mut vars = BTreeMap::new();
        vars.insert("ProjectName".to_string(), Variable::required("Name"));
        vars.insert("GitHubRepo".to_string(), Variable::required("Repo"));
        vars.insert(
            "Author".to_string(),
            Variable::optional("Author", "Developer"),
        );
        let mut schema = TemplateSchema::new("demo", "frontend", "1.0.0").with_variables(vars);
        schema.add_file(text_file("README.md", "# Demo"));
        schema
    }

    // ── structural ────────────────────────────────────────────────────────

    #[test]
    fn structural_file_rule_precedes_any_hash_check() {
        let mut schema = valid_schema();
        schema.files[0].hash = codec::content_hash(b"something else");
        let mut empty = text_file("empty.txt", "x");
        empty.content.clear();
        schema.add_file(empty);
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::FileMissingContent {
                path: "empty.txt".into()
            })
        );
    }

    #[test]
    fn valid_schema_passes() {
        assert!(SchemaValidator::validate(&valid_schema()).is_ok());
    }

    #[test]
    fn missing_name_wins_over_missing_files() {
        let mut schema = valid_schema();
        schema.name.clear();
        schema.files.clear();
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::MissingIdentity { field: "name" })
        );
    }

    #[test]
    fn identity_fields_checked_in_order() {
        let mut schema = valid_schema();
        schema.template_type.clear();
        schema.version.clear();
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::MissingIdentity { field: "type" })
        );
    }

    #[test]
    fn null_variables_rejected() {
        let mut schema = valid_schema();
        schema.variables = None;
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::MissingVariables)
        );
    }

    #[test]
    fn untyped_variable_rejected() {
        let mut schema = valid_schema();
        if let Some(vars) = schema.variables.as_mut() {
            vars.get_mut("Author").unwrap().var_type.clear();
        }
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::VariableMissingType {
                name: "Author".into()
            })
        );
    }

    #[test]
    fn no_files_rejected() {
        let mut schema = valid_schema();
        schema.files.clear();
        assert_eq!(SchemaValidator::validate(&schema), Err(DomainError::NoFiles));
    }

    #[test]
    fn file_without_path_reports_index() {
        let mut schema = valid_schema();
        schema.add_file(text_file("", "x"));
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::FileMissingPath { index: 1 })
        );
    }

    #[test]
    fn file_without_content_reports_path() {
        let mut schema = valid_schema();
        schema.add_file(text_file("empty.txt", ""));
        assert_eq!(
            SchemaValidator::validate(&schema),
            Err(DomainError::FileMissingContent {
                path: "empty.txt".into()
            })
        );
    }

    // ── integrity ─────────────────────────────────────────────────────────

    #[test]
    fn edited_content_is_a_hash_mismatch() {
        let mut schema = valid_schema();
        schema.files[0].content = "# Tampered".into();
        match SchemaValidator::validate(&schema) {
            Err(DomainError::HashMismatch { path, expected, .. }) => {
                assert_eq!(path, "README.md");
                assert_eq!(expected, codec::content_hash(b"# Demo"));
            }
            other => panic!("expected hash mismatch, got {other:?}"),
        }
    }

    #[test]
    fn compressed_content_is_verified_after_decoding() {
        let bytes = "line\n".repeat(1000);
        let (stored, compressed) = codec::compress(bytes.as_bytes()).unwrap();
        let mut schema = valid_schema();
        schema.add_file(FileSpec {
            path: "big.txt".into(),
            template: false,
            content: stored,
            size: bytes.len() as u64,
            hash: codec::content_hash(bytes.as_bytes()),
            compressed,
            mappings: vec![],
        });
        assert!(SchemaValidator::validate(&schema).is_ok());
    }

    #[test]
    fn corrupt_compressed_content_is_undecodable() {
        let mut schema = valid_schema();
        schema.files[0].compressed = true;
        assert!(matches!(
            SchemaValidator::validate(&schema),
            Err(DomainError::UndecodableContent { .. })
        ));
    }

    #[test]
    fn empty_hash_skips_integrity_check() {
        let mut schema = valid_schema();
        schema.files[0].hash.clear();
        schema.files[0].content = "anything".into();
        assert!(SchemaValidator::validate(&schema).is_ok());
    }

    // ── variable binding ──────────────────────────────────────────────────

    #[test]
    fn bound_required_variables_pass() {
        let vars = TemplateVariables::new("demo", "acme/demo");
        assert!(SchemaValidator::validate_variables(&valid_schema(), &vars).is_ok());
    }

    #[test]
    fn empty_project_name_rejected() {
        let vars = TemplateVariables::new("", "acme/demo");
        assert_eq!(
            SchemaValidator::validate_variables(&valid_schema(), &vars),
            Err(DomainError::RequiredVariable {
                name: "ProjectName".into()
            })
        );
    }

    #[test]
    fn default_satisfies_required_variable() {
        let mut schema = valid_schema();
        if let Some(vars) = schema.variables.as_mut() {
            vars.insert(
                "GitHubRepo".into(),
                Variable {
                    var_type: "string".into(),
                    required: true,
                    default: Some("acme/fallback".into()),
                    description: String::new(),
                },
            );
        }
        let vars = TemplateVariables::new("demo", "");
        assert!(SchemaValidator::validate_variables(&schema, &vars).is_ok());
    }

    #[test]
    fn custom_required_variables_are_not_enforced() {
        let mut schema = valid_schema();
        if let Some(vars) = schema.variables.as_mut() {
            vars.insert("Port".into(), Variable::required("HTTP port"));
        }
        let vars = TemplateVariables::new("demo", "acme/demo");
        assert!(SchemaValidator::validate_variables(&schema, &vars).is_ok());
    }
}
