// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Plugin and preset primitives for the operon generator.
//!
//! This crate defines the boundary between the generation engine and the
//! pieces it orchestrates:
//!
//! - [`CodegenPlugin`] - a text-emitting unit contributing one chunk of a
//!   generated file
//! - [`PluginRegistry`] - named plugin lookup with an explicit reserved-name
//!   merge
//! - [`PluginConfig`] - configuration shared by every plugin in a chain
//! - [`OutputPreset`] - planning strategy expanding one configured output
//!   into finalized [`GenerationSection`]s
//! - [`uses_external_types`] - detection of schema-type usage inside
//!   documents
//!
//! # Architecture
//!
//! ```text
//! engine → OutputPreset (planning) → GenerationSection → plugin chain (emission)
//! ```

mod config;
mod error;
mod plugin;
mod preset;
mod registry;
mod usage;

pub use config::{ExternalFragment, PluginConfig};
pub use error::PresetError;
pub use plugin::{CodegenPlugin, LITERAL_PLUGIN_NAME, PluginInput, PluginRef};
pub use preset::{DocumentFile, GenerationSection, OutputPreset, OutputRequest};
pub use registry::PluginRegistry;
pub use usage::uses_external_types;
