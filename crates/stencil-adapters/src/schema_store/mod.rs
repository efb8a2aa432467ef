//! Schema store adapters.

mod memory;

pub use memory::InMemorySchemaStore;
