//! Parsed operation documents.
//!
//! A [`Document`] is one parsed unit of generation input: executable
//! operations plus the fragments they spread. Loaders produce documents;
//! planning walks them read-only.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// A parsed document of operation and fragment definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Definitions in source order.
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Create a document from its definitions.
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }
}

/// A top-level definition inside a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Definition {
    /// An executable operation (query, mutation, subscription).
    Operation(OperationDefinition),
    /// A named fragment.
    Fragment(FragmentDefinition),
}

/// An executable operation definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDefinition {
    /// The operation kind.
    pub kind: OperationKind,
    /// Operation name, when the source names it.
    pub name: Option<String>,
    /// Declared variables.
    pub variables: Vec<VariableDefinition>,
    /// The root selection set.
    pub selection_set: SelectionSet,
}

impl OperationDefinition {
    /// An unnamed query over `selections`.
    pub fn query(selections: Vec<Selection>) -> Self {
        Self {
            kind: OperationKind::Query,
            name: None,
            variables: Vec::new(),
            selection_set: SelectionSet::new(selections),
        }
    }

    /// Name the operation.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare variables on the operation.
    pub fn with_variables(mut self, variables: Vec<VariableDefinition>) -> Self {
        self.variables = variables;
        self
    }
}

/// The kind of an executable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Get the lowercase keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// A variable declared on an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Variable name, without the `$` sigil.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl VariableDefinition {
    /// Create a variable definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A named fragment definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentDefinition {
    /// Fragment name.
    pub name: String,
    /// Name of the type the fragment applies to.
    pub type_condition: String,
    /// The fragment's selection set.
    pub selection_set: SelectionSet,
}

impl FragmentDefinition {
    /// Create a fragment `name` on `type_condition`.
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selections: Vec<Selection>,
    ) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            selection_set: SelectionSet::new(selections),
        }
    }
}

/// An ordered set of selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    /// Selections in source order.
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    /// Create a selection set from its selections.
    pub fn new(selections: Vec<Selection>) -> Self {
        Self { selections }
    }

    /// Check whether the set has no selections.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// One selection inside a selection set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// A field selection.
    Field(Field),
    /// A spread of a named fragment.
    FragmentSpread(FragmentSpread),
    /// An inline fragment.
    InlineFragment(InlineFragment),
}

impl Selection {
    /// A leaf field selection with no sub-selections.
    pub fn field(name: impl Into<String>) -> Self {
        Selection::Field(Field::new(name))
    }

    /// A spread of the named fragment.
    pub fn spread(name: impl Into<String>) -> Self {
        Selection::FragmentSpread(FragmentSpread::new(name))
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Selection::FragmentSpread(spread)
    }
}

impl From<InlineFragment> for Selection {
    fn from(inline: InlineFragment) -> Self {
        Selection::InlineFragment(inline)
    }
}

/// A field selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Sub-selections. Empty for leaf fields.
    pub selection_set: SelectionSet,
}

impl Field {
    /// Create a leaf field with no sub-selections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selection_set: SelectionSet::default(),
        }
    }

    /// Attach sub-selections to the field.
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selection_set = SelectionSet::new(selections);
        self
    }

    /// Check whether the field selects nothing beneath itself.
    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_empty()
    }
}

/// A spread of a named fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentSpread {
    /// Name of the spread fragment.
    pub name: String,
}

impl FragmentSpread {
    /// Create a spread of the named fragment.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An inline fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineFragment {
    /// Type condition, when the source constrains one.
    pub type_condition: Option<String>,
    /// The fragment's selection set.
    pub selection_set: SelectionSet,
}

impl InlineFragment {
    /// An inline fragment constrained to `type_condition`.
    pub fn on(type_condition: impl Into<String>, selections: Vec<Selection>) -> Self {
        Self {
            type_condition: Some(type_condition.into()),
            selection_set: SelectionSet::new(selections),
        }
    }

    /// An inline fragment inheriting the surrounding type.
    pub fn anonymous(selections: Vec<Selection>) -> Self {
        Self {
            type_condition: None,
            selection_set: SelectionSet::new(selections),
        }
    }
}
