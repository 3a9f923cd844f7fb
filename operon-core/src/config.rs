//! Shared plugin-chain configuration.

use std::path::PathBuf;

use indexmap::IndexMap;
use operon_graph::FragmentDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration shared by every plugin in a generation section.
///
/// The named fields are the keys presets derive or rewrite while planning;
/// everything else the caller configures flows through `extra` untouched, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Namespace generated code qualifies schema types with.
    pub namespaced_import_name: Option<String>,
    /// Module namespace client-side plugins import operation types from.
    pub import_operation_types_from: Option<String>,
    /// Fragments available to the section without being defined in its
    /// documents.
    #[serde(default)]
    pub external_fragments: Vec<ExternalFragment>,
    /// Emit `import type` instead of `import` for synthesized imports.
    #[serde(default)]
    pub use_type_imports: bool,
    /// Pass-through options for downstream plugins.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PluginConfig {
    /// Names of all external fragments, in declaration order.
    pub fn external_fragment_names(&self) -> Vec<String> {
        self.external_fragments
            .iter()
            .map(|fragment| fragment.name.clone())
            .collect()
    }
}

/// A fragment resolved outside the documents of a generation section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFragment {
    /// Fragment name as spread inside documents.
    pub name: String,
    /// Identifier generated code imports the fragment under.
    pub import_name: String,
    /// Name of the type the fragment condition applies to.
    pub on_type: String,
    /// File the fragment definition lives in.
    pub location: PathBuf,
    /// The parsed fragment definition.
    pub node: FragmentDefinition,
}

#[cfg(test)]
mod tests {
    use operon_graph::Selection;
    use serde_json::json;

    use super::*;

    fn user_fields_fragment() -> ExternalFragment {
        ExternalFragment {
            name: "UserFields".to_string(),
            import_name: "UserFieldsFragment".to_string(),
            on_type: "User".to_string(),
            location: PathBuf::from("src/fragments/user.graphql"),
            node: FragmentDefinition::new("UserFields", "User", vec![Selection::field("id")]),
        }
    }

    #[test]
    fn test_external_fragment_names_keep_order() {
        let mut second = user_fields_fragment();
        second.name = "PostFields".to_string();

        let config = PluginConfig {
            external_fragments: vec![user_fields_fragment(), second],
            ..Default::default()
        };
        assert_eq!(
            config.external_fragment_names(),
            vec!["UserFields", "PostFields"]
        );
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let config: PluginConfig = serde_json::from_value(json!({
            "namespacedImportName": "Types",
            "useTypeImports": true,
            "avoidOptionals": true,
            "scalars": { "DateTime": "string" }
        }))
        .expect("Failed to deserialize");

        assert_eq!(config.namespaced_import_name.as_deref(), Some("Types"));
        assert!(config.use_type_imports);
        assert!(config.external_fragments.is_empty());
        // Unknown keys land in `extra` unchanged.
        assert_eq!(config.extra.get("avoidOptionals"), Some(&json!(true)));
        assert_eq!(
            config.extra.get("scalars"),
            Some(&json!({ "DateTime": "string" }))
        );
    }

    #[test]
    fn test_default_is_empty() {
        let config = PluginConfig::default();
        assert!(config.namespaced_import_name.is_none());
        assert!(config.import_operation_types_from.is_none());
        assert!(config.external_fragments.is_empty());
        assert!(!config.use_type_imports);
        assert!(config.extra.is_empty());
    }
}
