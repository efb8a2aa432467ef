//! The closed set of template types shipped with Stencil.

use std::collections::BTreeMap;

use stencil_core::{
    application::ports::TemplateType,
    domain::{Mapping, Variable},
};

use super::{FrontendTemplate, FullstackTemplate, GoApiTemplate};

/// One variant per built-in project kind, dispatched through
/// [`TemplateType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTemplate {
    Frontend,
    GoApi,
    Fullstack,
}

impl BuiltinTemplate {
    pub const ALL: [BuiltinTemplate; 3] = [Self::Frontend, Self::GoApi, Self::Fullstack];

    /// Look a variant up by its registry name, e.g. `go-api`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn strategy(&self) -> &'static dyn TemplateType {
        match self {
            Self::Frontend => &FrontendTemplate,
            Self::GoApi => &GoApiTemplate,
            Self::Fullstack => &FullstackTemplate,
        }
    }
}

impl TemplateType for BuiltinTemplate {
    fn name(&self) -> &str {
        self.strategy().name()
    }

    fn schema_name(&self) -> &str {
        self.strategy().schema_name()
    }

    fn description(&self) -> &str {
        self.strategy().description()
    }

    fn version(&self) -> &str {
        self.strategy().version()
    }

    fn hooks(&self) -> BTreeMap<String, Vec<String>> {
        self.strategy().hooks()
    }

    fn get_mappings(&self, relative_path: &str) -> Vec<Mapping> {
        self.strategy().get_mappings(relative_path)
    }

    fn get_variables(&self) -> BTreeMap<String, Variable> {
        self.strategy().get_variables()
    }

    fn should_template(&self, relative_path: &str) -> bool {
        self.strategy().should_template(relative_path)
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        self.strategy().should_skip(relative_path)
    }
}
