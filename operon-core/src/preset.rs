//! Output planning boundary: requests in, generation sections out.

use std::{path::PathBuf, sync::Arc};

use operon_graph::{Document, SchemaAst, SchemaSource};
use serde::{Deserialize, Serialize};

use crate::{
    config::PluginConfig, error::PresetError, plugin::PluginRef, registry::PluginRegistry,
};

/// A parsed document plus where it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Source location, when the document came from disk.
    pub location: Option<PathBuf>,
    /// The parsed document.
    pub document: Document,
}

impl DocumentFile {
    /// Create a document file without a source location.
    pub fn new(document: Document) -> Self {
        Self {
            location: None,
            document,
        }
    }

    /// Create a document file loaded from `location`.
    pub fn with_location(location: impl Into<PathBuf>, document: Document) -> Self {
        Self {
            location: Some(location.into()),
            document,
        }
    }
}

/// Everything a preset needs to plan one configured output.
///
/// Requests are moved into the planning call; schema data is shared through
/// [`Arc`] so plans never deep-copy it.
#[derive(Debug, Clone)]
pub struct OutputRequest<C> {
    /// Destination the caller configured for this output.
    pub base_output_dir: PathBuf,
    /// Plugin chain as configured by the caller.
    pub plugins: Vec<PluginRef>,
    /// Plugins available to the chain, by name.
    pub plugin_map: PluginRegistry,
    /// Configuration shared by the whole chain.
    pub config: PluginConfig,
    /// Preset-specific configuration.
    pub preset_config: C,
    /// The schema the output is generated against.
    pub schema: Arc<SchemaSource>,
    /// Abstract form of the schema.
    pub schema_ast: Arc<SchemaAst>,
    /// Documents assigned to this output.
    pub documents: Vec<DocumentFile>,
}

/// One finalized output file: destination, plugin chain, and the data the
/// chain runs against.
#[derive(Debug, Clone)]
pub struct GenerationSection {
    /// Path of the output file.
    pub filename: PathBuf,
    /// Plugin chain to run, in order.
    pub plugins: Vec<PluginRef>,
    /// Plugins available to the chain, by name.
    pub plugin_map: PluginRegistry,
    /// Configuration shared by the whole chain.
    pub config: PluginConfig,
    /// The schema the output is generated against.
    pub schema: Arc<SchemaSource>,
    /// Abstract form of the schema.
    pub schema_ast: Arc<SchemaAst>,
    /// Documents assigned to this output.
    pub documents: Vec<DocumentFile>,
}

/// Expands one configured output into finalized generation sections.
///
/// The engine calls the active preset once per configured output, then runs
/// each returned section's plugin chain to produce file content.
pub trait OutputPreset {
    /// Preset-specific configuration carried on the request.
    type Config;

    /// Plan the generation sections for one configured output.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the request cannot be planned.
    /// Planning is all-or-nothing; no sections are produced on failure.
    fn build_generates_section(
        &self,
        request: OutputRequest<Self::Config>,
    ) -> Result<Vec<GenerationSection>, PresetError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_file_locations() {
        let unlocated = DocumentFile::new(Document::default());
        assert!(unlocated.location.is_none());

        let located = DocumentFile::with_location("src/queries/user.graphql", Document::default());
        assert_eq!(
            located.location.as_deref(),
            Some(std::path::Path::new("src/queries/user.graphql"))
        );
    }
}
