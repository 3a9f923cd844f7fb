use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while planning generation output.
///
/// Planning fails as a whole: none of these leave a partial plan behind.
#[derive(Debug, Error, Diagnostic)]
pub enum PresetError {
    #[error("preset '{preset}' requires a non-empty \"typesPath\" in its preset configuration")]
    #[diagnostic(
        code(operon::preset::missing_types_path),
        help(
            "set \"typesPath\" to the path of your generated base types module, e.g. \"./types\""
        )
    )]
    MissingTypesPath { preset: &'static str },

    #[error("plugin name '{name}' is reserved")]
    #[diagnostic(
        code(operon::preset::reserved_plugin_name),
        help(
            "the preset registers its own plugin under '{name}'; rename the conflicting entry"
        )
    )]
    ReservedPluginName { name: String },
}
