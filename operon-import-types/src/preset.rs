//! Plan construction for the import-types preset.

use std::sync::Arc;

use operon_core::{
    GenerationSection, LITERAL_PLUGIN_NAME, OutputPreset, OutputRequest, PluginRef, PresetError,
    uses_external_types,
};
use operon_plugin_add::AddPlugin;

use crate::{config::ImportTypesConfig, import::TypesImport};

/// Name this preset is registered under.
pub const PRESET_NAME: &str = "import-types";

/// Output preset pointing generated code at a shared base types module.
///
/// All documents are planned into a single output file. When any of them
/// references schema-level types, the plan opens with a synthesized step
/// importing the base types module; otherwise the configured plugin chain
/// passes through untouched. Either way the result is exactly one
/// [`GenerationSection`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportTypesPreset;

impl OutputPreset for ImportTypesPreset {
    type Config = ImportTypesConfig;

    fn build_generates_section(
        &self,
        request: OutputRequest<ImportTypesConfig>,
    ) -> Result<Vec<GenerationSection>, PresetError> {
        if request.preset_config.types_path.is_empty() {
            return Err(PresetError::MissingTypesPath {
                preset: PRESET_NAME,
            });
        }
        let namespace = request.preset_config.namespace();

        let plugin_map = request
            .plugin_map
            .with_reserved(LITERAL_PLUGIN_NAME, Arc::new(AddPlugin))?;

        // Operation plugins and client runtimes must resolve schema types
        // through the same namespace the import binds.
        let mut config = request.config;
        config.namespaced_import_name = Some(namespace.to_string());
        config.import_operation_types_from = Some(namespace.to_string());
        config.external_fragments = Vec::new();

        let external_fragments = config.external_fragment_names();
        let needs_import = request.documents.iter().any(|file| {
            uses_external_types(
                &file.document,
                &external_fragments,
                Some(&request.schema_ast),
            )
        });

        let plugins = if needs_import {
            let mut import = TypesImport::new(namespace, &request.preset_config.types_path);
            if config.use_type_imports {
                import = import.type_only();
            }
            let mut chain = Vec::with_capacity(request.plugins.len() + 1);
            chain.push(PluginRef::literal(import.render()));
            chain.extend(request.plugins);
            chain
        } else {
            request.plugins
        };

        Ok(vec![GenerationSection {
            filename: request.base_output_dir,
            plugins,
            plugin_map,
            config,
            schema: request.schema,
            schema_ast: request.schema_ast,
            documents: request.documents,
        }])
    }
}
