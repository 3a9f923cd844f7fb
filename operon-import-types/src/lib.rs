//! Single-file output preset that imports schema types from a shared module.
//!
//! Operation-focused plugins can either redeclare every schema type in each
//! output file or reference the declarations a schema-types plugin already
//! generated elsewhere. This preset plans the second shape: all documents
//! flow into one output file, and when any of them actually references
//! schema-level types, the planned plugin chain opens with a synthesized
//! import of the shared base types module.
//!
//! # Usage
//!
//! ```ignore
//! use operon_core::OutputPreset;
//! use operon_import_types::{ImportTypesConfig, ImportTypesPreset};
//!
//! let request = engine.output_request(ImportTypesConfig::new("./types"));
//! let sections = ImportTypesPreset.build_generates_section(request)?;
//! ```
//!
//! The planned output file then starts with:
//!
//! ```ts
//! import * as Types from './types';
//! ```

mod config;
mod import;
mod preset;

pub use config::{DEFAULT_NAMESPACE, ImportTypesConfig};
pub use import::TypesImport;
pub use preset::{ImportTypesPreset, PRESET_NAME};
