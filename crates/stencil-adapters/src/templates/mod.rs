//! Built-in template types.
//!
//! Each type encodes the skip, templating and mapping rules for one kind of
//! reference project. [`BuiltinTemplate`] closes over them and
//! [`builtin_registry`] registers every variant.

mod builtin;
mod common;
mod frontend;
mod fullstack;
mod go_api;

pub use builtin::BuiltinTemplate;
pub use frontend::FrontendTemplate;
pub use fullstack::FullstackTemplate;
pub use go_api::GoApiTemplate;

use stencil_core::application::TemplateRegistry;
use tracing::debug;

/// Registry with every built-in template type.
pub fn builtin_registry() -> TemplateRegistry {
    let registry = BuiltinTemplate::ALL
        .into_iter()
        .fold(TemplateRegistry::new(), |registry, kind| {
            registry.with(Box::new(kind))
        });
    debug!(types = ?registry.names(), "Registered built-in template types");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_all_builtins() {
        let registry = builtin_registry();
        assert_eq!(registry.names(), vec!["frontend", "fullstack", "go-api"]);
        for info in registry.infos() {
            assert_eq!(info.variables.len(), 4);
        }
    }
}
