//! Template type registry.
//!
//! Built once by an explicit call at startup and then only read. Callers own
//! the registry and pass it to the services that need it.

use std::collections::BTreeMap;

use crate::application::{
    ApplicationError,
    ports::{TemplateType, TemplateTypeInfo},
};
use crate::error::StencilResult;

/// Name to strategy lookup.
#[derive(Default)]
pub struct TemplateRegistry {
    types: BTreeMap<String, Box<dyn TemplateType>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template type, replacing any previous one with the same name.
    pub fn register(&mut self, template_type: Box<dyn TemplateType>) {
        self.types
            .insert(template_type.name().to_owned(), template_type);
    }

    /// Builder form of [`Self::register`].
    pub fn with(mut self, template_type: Box<dyn TemplateType>) -> Self {
        self.register(template_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn TemplateType> {
        self.types.get(name).map(Box::as_ref)
    }

    /// Like [`Self::get`] but fails with the list of known names.
    pub fn require(&self, name: &str) -> StencilResult<&dyn TemplateType> {
        self.get(name).ok_or_else(|| {
            ApplicationError::TemplateTypeNotFound {
                name: name.to_owned(),
                available: self.names().into_iter().map(str::to_owned).collect(),
            }
            .into()
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn infos(&self) -> Vec<TemplateTypeInfo> {
        self.types.values().map(|t| t.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("types", &self.names())
            .finish()
    }
}
