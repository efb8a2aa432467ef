//! In-memory schema store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::SchemaStore},
    domain::TemplateSchema,
    error::StencilResult,
};

/// Thread-safe in-memory schema store, keyed by schema name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaStore {
    inner: Arc<RwLock<BTreeMap<String, TemplateSchema>>>,
}

impl InMemorySchemaStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of schemas.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SchemaStore for InMemorySchemaStore {
    fn insert(&self, schema: TemplateSchema) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(schema.name.clone(), schema);
        Ok(())
    }

    fn get(&self, name: &str) -> StencilResult<Option<TemplateSchema>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(name).cloned())
    }

    fn find_by_type(&self, template_type: &str) -> StencilResult<Option<TemplateSchema>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner
            .values()
            .find(|schema| schema.template_type == template_type)
            .cloned())
    }

    fn list(&self) -> StencilResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.keys().cloned().collect())
    }
}
