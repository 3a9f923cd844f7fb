//! Preset configuration.

use serde::Deserialize;

/// Default namespace the base types module is imported under.
pub const DEFAULT_NAMESPACE: &str = "Types";

/// Configuration for [`ImportTypesPreset`](crate::ImportTypesPreset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTypesConfig {
    /// Path of the base types module, relative to the planned output file.
    ///
    /// Required. Planning fails when it is missing or empty.
    #[serde(default)]
    pub types_path: String,
    /// Namespace the base types module is imported under.
    ///
    /// Falls back to [`DEFAULT_NAMESPACE`] when unset or empty.
    #[serde(default)]
    pub import_types_namespace: Option<String>,
}

impl ImportTypesConfig {
    /// Create a configuration pointing at `types_path`.
    pub fn new(types_path: impl Into<String>) -> Self {
        Self {
            types_path: types_path.into(),
            import_types_namespace: None,
        }
    }

    /// Override the namespace the base types module is imported under.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.import_types_namespace = Some(namespace.into());
        self
    }

    /// The effective namespace, falling back to [`DEFAULT_NAMESPACE`].
    pub fn namespace(&self) -> &str {
        match self.import_types_namespace.as_deref() {
            Some(namespace) if !namespace.is_empty() => namespace,
            _ => DEFAULT_NAMESPACE,
        }
    }
}
