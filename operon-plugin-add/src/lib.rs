//! Literal-content plugin.
//!
//! Most plugins derive output from the schema and documents, but generated
//! files regularly need fixed text too: header comments, lint directives,
//! extra imports, custom exports. This plugin emits its configured `content`
//! verbatim. Presets also lean on it to inject synthesized statements, which
//! is why it registers under the reserved [`LITERAL_PLUGIN_NAME`] key.
//!
//! # Options
//!
//! ```json
//! { "content": "/* eslint-disable */" }
//! ```
//!
//! `content` accepts a single string or a list of strings joined with
//! newlines.

use eyre::{Result, WrapErr};
use operon_core::{CodegenPlugin, PluginInput};
use serde::Deserialize;

pub use operon_core::LITERAL_PLUGIN_NAME;

/// Step options accepted by [`AddPlugin`].
#[derive(Debug, Clone, Deserialize)]
pub struct AddPluginOptions {
    /// Text to emit.
    pub content: Content,
}

/// One chunk of literal content, or several.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// A single chunk, emitted as-is.
    One(String),
    /// Several chunks, joined with newlines.
    Many(Vec<String>),
}

impl Content {
    /// Join the configured chunks into the emitted text.
    pub fn join(&self) -> String {
        match self {
            Content::One(content) => content.clone(),
            Content::Many(chunks) => chunks.join("\n"),
        }
    }
}

/// Plugin emitting configured literal content verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddPlugin;

impl CodegenPlugin for AddPlugin {
    fn emit(&self, input: &PluginInput<'_>) -> Result<String> {
        let options = input.options.ok_or_else(|| {
            eyre::eyre!("Plugin '{}' requires a 'content' option", LITERAL_PLUGIN_NAME)
        })?;
        let options: AddPluginOptions = serde_json::from_value(options.clone())
            .wrap_err_with(|| format!("Invalid options for plugin '{}'", LITERAL_PLUGIN_NAME))?;
        Ok(options.content.join())
    }
}
