//! Schema source and abstract form.
//!
//! [`SchemaSource`] carries the schema as loaded, opaque to planning.
//! [`SchemaAst`] is the abstract form planning reads: root operation types
//! plus a table of named type definitions with field lookups.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{OperationKind, TypeRef};

/// The schema a generation run works against, as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSource {
    /// Raw schema text.
    pub sdl: String,
    /// Source location, when the schema came from disk.
    pub path: Option<PathBuf>,
}

impl SchemaSource {
    /// Create a schema source from raw schema text.
    pub fn new(sdl: impl Into<String>) -> Self {
        Self {
            sdl: sdl.into(),
            path: None,
        }
    }

    /// Record where the schema was loaded from.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Abstract form of a schema.
///
/// Type definitions keep their declaration order, so downstream emitters see
/// types in the same order the schema declares them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaAst {
    /// Name of the query root type.
    pub query_type: Option<String>,
    /// Name of the mutation root type.
    pub mutation_type: Option<String>,
    /// Name of the subscription root type.
    pub subscription_type: Option<String>,
    /// Named type definitions, keyed by type name.
    pub types: IndexMap<String, TypeDefinition>,
}

impl SchemaAst {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query root type name.
    pub fn with_query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = Some(name.into());
        self
    }

    /// Set the mutation root type name.
    pub fn with_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    /// Set the subscription root type name.
    pub fn with_subscription_type(mut self, name: impl Into<String>) -> Self {
        self.subscription_type = Some(name.into());
        self
    }

    /// Add a type definition, keyed by its name.
    pub fn with_type(mut self, definition: TypeDefinition) -> Self {
        self.types
            .insert(definition.name().to_string(), definition);
        self
    }

    /// Look up a type definition by name.
    pub fn named_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// The root type name for an operation kind, when the schema declares one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDefinition {
    /// A scalar type.
    Scalar(ScalarType),
    /// An object type.
    Object(ObjectType),
    /// An interface type.
    Interface(InterfaceType),
    /// A union type.
    Union(UnionType),
    /// An enum type.
    Enum(EnumType),
    /// An input object type.
    InputObject(InputObjectType),
}

impl TypeDefinition {
    /// The declared type name.
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::Interface(interface) => &interface.name,
            TypeDefinition::Union(union) => &union.name,
            TypeDefinition::Enum(enumeration) => &enumeration.name,
            TypeDefinition::InputObject(input) => &input.name,
        }
    }
}

/// A scalar type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarType {
    /// Type name.
    pub name: String,
}

impl ScalarType {
    /// Create a scalar type.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An object type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldDefinition>,
}

impl ObjectType {
    /// Create an object type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field on the type.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDefinition::new(name, ty));
        self
    }

    /// Look up a declared field's type by name.
    pub fn field_type(&self, name: &str) -> Option<&TypeRef> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.ty)
    }
}

/// An interface type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceType {
    /// Type name.
    pub name: String,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldDefinition>,
}

impl InterfaceType {
    /// Create an interface type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field on the interface.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDefinition::new(name, ty));
        self
    }
}

/// A union type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionType {
    /// Type name.
    pub name: String,
    /// Names of the member types.
    pub members: Vec<String>,
}

impl UnionType {
    /// Create a union type with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member type.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }
}

/// An enum type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Declared values, in declaration order.
    pub values: Vec<String>,
}

impl EnumType {
    /// Create an enum type with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Add a value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// An input object type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputObjectType {
    /// Type name.
    pub name: String,
    /// Declared input fields, in declaration order.
    pub fields: Vec<InputValueDefinition>,
}

impl InputObjectType {
    /// Create an input object type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare an input field on the type.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(InputValueDefinition::new(name, ty));
        self
    }
}

/// A field declared on an object or interface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl FieldDefinition {
    /// Create a field definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A field declared on an input object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValueDefinition {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl InputValueDefinition {
    /// Create an input field definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
