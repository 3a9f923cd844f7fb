//! Named plugin registry.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{error::PresetError, plugin::CodegenPlugin};

/// Insertion-ordered registry mapping plugin names to implementations.
///
/// The engine resolves each named chain step through the registry of its
/// section. Registries are cheap to clone; the plugin implementations are
/// shared, not copied.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: IndexMap<String, Arc<dyn CodegenPlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, plugin: Arc<dyn CodegenPlugin>) {
        self.plugins.insert(name.into(), plugin);
    }

    /// Look up a plugin by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn CodegenPlugin>> {
        self.plugins.get(name)
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Iterate over registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    /// Get the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Copy this registry and register `plugin` under a name a preset
    /// reserves for itself.
    ///
    /// The caller's entries keep their order; the reserved entry is appended
    /// after them.
    ///
    /// # Errors
    ///
    /// Fails when the caller already registered a plugin under `name`;
    /// reserved entries are never silently shadowed.
    pub fn with_reserved(
        &self,
        name: &str,
        plugin: Arc<dyn CodegenPlugin>,
    ) -> Result<Self, PresetError> {
        if self.contains(name) {
            return Err(PresetError::ReservedPluginName {
                name: name.to_string(),
            });
        }
        let mut merged = self.clone();
        merged.plugins.insert(name.to_string(), plugin);
        Ok(merged)
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
