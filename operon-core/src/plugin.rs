//! Plugin trait and plugin chain references.

use eyre::Result;
use operon_graph::{SchemaAst, SchemaSource};
use serde_json::Value;

use crate::{config::PluginConfig, preset::DocumentFile};

/// Registry key reserved for the literal-content plugin.
///
/// Presets that inject synthesized text (such as import statements) register
/// the literal-content plugin under this name, and the engine dispatches
/// [`PluginRef::Literal`] steps through it.
pub const LITERAL_PLUGIN_NAME: &str = "add";

/// Everything a plugin can read while emitting its contribution.
#[derive(Debug, Clone, Copy)]
pub struct PluginInput<'a> {
    /// The schema the output is generated against.
    pub schema: &'a SchemaSource,
    /// Abstract form of the schema.
    pub schema_ast: &'a SchemaAst,
    /// Documents assigned to the output file.
    pub documents: &'a [DocumentFile],
    /// Configuration shared by the whole plugin chain.
    pub config: &'a PluginConfig,
    /// Step-scoped options, when the chain entry carries any.
    pub options: Option<&'a Value>,
}

/// A text-emitting unit contributing one chunk of a generated file.
///
/// The engine runs each section's chain in order and concatenates the
/// emitted chunks into the output file content. Implementations must be
/// stateless with respect to calls; sections may be emitted concurrently.
pub trait CodegenPlugin: Send + Sync {
    /// Emit this plugin's contribution.
    ///
    /// # Errors
    ///
    /// Returns an error when the input or step options are unusable; the
    /// engine aborts the whole output file on the first failing step.
    fn emit(&self, input: &PluginInput<'_>) -> Result<String>;
}

/// One step in an output file's plugin chain.
///
/// Order matters: steps execute in sequence and their output is
/// concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginRef {
    /// Run the plugin registered under this name.
    Named(String),
    /// Run the literal-content plugin with inline content.
    Literal {
        /// Text emitted verbatim.
        content: String,
    },
}

impl PluginRef {
    /// Reference a registered plugin by name.
    pub fn named(name: impl Into<String>) -> Self {
        PluginRef::Named(name.into())
    }

    /// Inline literal content, dispatched through the reserved
    /// literal-content plugin.
    pub fn literal(content: impl Into<String>) -> Self {
        PluginRef::Literal {
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_ref_constructors() {
        assert_eq!(
            PluginRef::named("typescript-operations"),
            PluginRef::Named("typescript-operations".to_string())
        );
        assert_eq!(
            PluginRef::literal("/* header */\n"),
            PluginRef::Literal {
                content: "/* header */\n".to_string()
            }
        );
    }
}
