//! GraphQL document and schema representation for the operon generator.
//!
//! This crate provides the shared type definitions used across the operon
//! code generation pipeline. Loaders parse schemas and operation documents
//! into these types; presets and plugins consume them when planning and
//! emitting output files.
//!
//! # Architecture
//!
//! ```text
//! .graphql sources → loaders (parsing) → operon-graph (shared types) → presets/plugins
//! ```
//!
//! The types are designed to be:
//! - Output-language agnostic (no TypeScript/Rust-specific concerns)
//! - Narrowed to what generation planning reads (no location spans, no
//!   directives)
//! - Serializable (loaders and engines move them across process boundaries)

mod document;
mod schema;
mod types;

pub use document::{
    Definition, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationKind, Selection, SelectionSet, VariableDefinition,
};
pub use schema::{
    EnumType, FieldDefinition, InputObjectType, InputValueDefinition, InterfaceType, ObjectType,
    ScalarType, SchemaAst, SchemaSource, TypeDefinition, UnionType,
};
pub use types::TypeRef;
