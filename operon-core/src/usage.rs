//! Detection of schema-type usage inside documents.
//!
//! Generated operation code only needs to import the shared base types
//! module when a document actually references schema-level types: variable
//! declarations, leaf fields, or selections built on locally defined
//! fragments. This module decides that per document, optionally refined
//! against the schema's abstract form.

use operon_graph::{
    Definition, Document, Field, FragmentDefinition, OperationDefinition, SchemaAst, Selection,
    SelectionSet, TypeDefinition,
};

/// Decide whether `document` requires types from the shared base module.
///
/// `external_fragments` lists fragment names resolved outside the document
/// set; definitions of those fragments are skipped entirely and spreading
/// them never counts as usage. When `schema` is given, fields are resolved
/// against their parent type, and fields unknown to a resolved object parent
/// are ignored.
///
/// The check is pure: documents are walked read-only, and the result for one
/// document never depends on another.
pub fn uses_external_types(
    document: &Document,
    external_fragments: &[String],
    schema: Option<&SchemaAst>,
) -> bool {
    let walker = UsageWalker {
        external_fragments,
        schema,
    };
    document
        .definitions
        .iter()
        .any(|definition| match definition {
            Definition::Operation(operation) => walker.operation_uses_types(operation),
            Definition::Fragment(fragment) => walker.fragment_uses_types(fragment),
        })
}

struct UsageWalker<'a> {
    external_fragments: &'a [String],
    schema: Option<&'a SchemaAst>,
}

impl UsageWalker<'_> {
    fn operation_uses_types(&self, operation: &OperationDefinition) -> bool {
        // Variable types always name schema-level input types.
        if !operation.variables.is_empty() {
            return true;
        }
        let parent = self
            .schema
            .and_then(|schema| schema.root_type(operation.kind));
        self.selection_set_uses_types(&operation.selection_set, parent)
    }

    fn fragment_uses_types(&self, fragment: &FragmentDefinition) -> bool {
        if self.is_external(&fragment.name) {
            return false;
        }
        self.selection_set_uses_types(&fragment.selection_set, Some(&fragment.type_condition))
    }

    fn selection_set_uses_types(&self, set: &SelectionSet, parent: Option<&str>) -> bool {
        set.selections.iter().any(|selection| match selection {
            Selection::Field(field) => self.field_uses_types(field, parent),
            // Spreads count through their enclosing field, never on their own.
            Selection::FragmentSpread(_) => false,
            Selection::InlineFragment(inline) => {
                let parent = inline.type_condition.as_deref().or(parent);
                self.selection_set_uses_types(&inline.selection_set, parent)
            }
        })
    }

    fn field_uses_types(&self, field: &Field, parent: Option<&str>) -> bool {
        // Meta fields (`__typename`, introspection) never reference generated types.
        if field.name.starts_with("__") {
            return false;
        }

        // With a resolvable object parent, a field the schema does not declare
        // cannot contribute a type reference.
        let mut child_parent = None;
        if let Some(schema) = self.schema
            && let Some(parent_name) = parent
            && let Some(TypeDefinition::Object(object)) = schema.named_type(parent_name)
        {
            match object.field_type(&field.name) {
                Some(ty) => child_parent = Some(ty.base_name()),
                None => return false,
            }
        }

        if field.selection_set.is_empty() {
            return true;
        }
        let spreads_local_fragment = field.selection_set.selections.iter().any(|selection| {
            matches!(
                selection,
                Selection::FragmentSpread(spread) if !self.is_external(&spread.name)
            )
        });
        if spreads_local_fragment {
            return true;
        }
        self.selection_set_uses_types(&field.selection_set, child_parent)
    }

    fn is_external(&self, name: &str) -> bool {
        self.external_fragments
            .iter()
            .any(|external| external == name)
    }
}

#[cfg(test)]
mod tests {
    use operon_graph::{
        InlineFragment, ObjectType, OperationKind, TypeRef, UnionType, VariableDefinition,
    };

    use super::*;

    fn query_doc(selections: Vec<Selection>) -> Document {
        Document::new(vec![Definition::Operation(OperationDefinition::query(
            selections,
        ))])
    }

    fn sample_schema() -> SchemaAst {
        SchemaAst::new()
            .with_query_type("Query")
            .with_mutation_type("Mutation")
            .with_type(TypeDefinition::Object(
                ObjectType::new("Query")
                    .field("user", TypeRef::named("User"))
                    .field("media", TypeRef::named("Media")),
            ))
            .with_type(TypeDefinition::Object(
                ObjectType::new("Mutation").field("createUser", TypeRef::named("User")),
            ))
            .with_type(TypeDefinition::Object(
                ObjectType::new("User")
                    .field("id", TypeRef::non_null(TypeRef::named("ID")))
                    .field("name", TypeRef::named("String"))
                    .field(
                        "friends",
                        TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("User")))),
                    ),
            ))
            .with_type(TypeDefinition::Union(
                UnionType::new("Media").member("Book").member("Movie"),
            ))
            .with_type(TypeDefinition::Object(
                ObjectType::new("Book").field("title", TypeRef::named("String")),
            ))
    }

    #[test]
    fn test_empty_document_uses_nothing() {
        assert!(!uses_external_types(&Document::default(), &[], None));
        assert!(!uses_external_types(&query_doc(vec![]), &[], None));
    }

    #[test]
    fn test_leaf_field_counts() {
        let document = query_doc(vec![Selection::field("version")]);
        assert!(uses_external_types(&document, &[], None));
    }

    #[test]
    fn test_variables_always_count() {
        let document = Document::new(vec![Definition::Operation(
            OperationDefinition::query(vec![]).with_variables(vec![VariableDefinition::new(
                "id",
                TypeRef::non_null(TypeRef::named("ID")),
            )]),
        )]);
        assert!(uses_external_types(&document, &[], None));
        assert!(uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_top_level_spread_alone_never_counts() {
        let document = query_doc(vec![Selection::spread("UserFields")]);
        assert!(!uses_external_types(&document, &[], None));
        assert!(!uses_external_types(
            &document,
            &["UserFields".to_string()],
            None
        ));
    }

    #[test]
    fn test_field_over_local_spread_counts() {
        let document = query_doc(vec![
            Field::new("user")
                .with_selections(vec![Selection::spread("UserFields")])
                .into(),
        ]);
        assert!(uses_external_types(&document, &[], None));
        assert!(uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_field_over_external_spread_does_not_count() {
        let document = query_doc(vec![
            Field::new("user")
                .with_selections(vec![Selection::spread("UserFields")])
                .into(),
        ]);
        let external = vec!["UserFields".to_string()];
        assert!(!uses_external_types(&document, &external, None));
        assert!(!uses_external_types(
            &document,
            &external,
            Some(&sample_schema())
        ));
    }

    #[test]
    fn test_external_fragment_definition_skipped() {
        let document = Document::new(vec![Definition::Fragment(FragmentDefinition::new(
            "UserFields",
            "User",
            vec![Selection::field("id")],
        ))]);
        assert!(!uses_external_types(
            &document,
            &["UserFields".to_string()],
            None
        ));
        // The same definition counts when it belongs to this document set.
        assert!(uses_external_types(&document, &[], None));
    }

    #[test]
    fn test_unknown_field_skipped_with_schema() {
        let document = query_doc(vec![
            Field::new("user")
                .with_selections(vec![Selection::field("bogus")])
                .into(),
        ]);
        assert!(!uses_external_types(&document, &[], Some(&sample_schema())));
        // Without a schema there is nothing to resolve against, so it counts.
        assert!(uses_external_types(&document, &[], None));
    }

    #[test]
    fn test_meta_field_never_counts() {
        let document = query_doc(vec![Selection::field("__typename")]);
        assert!(!uses_external_types(&document, &[], None));
        assert!(!uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_meta_field_subtree_never_counts() {
        // Introspection shapes stay out of the verdict wholesale; the leaves
        // under `__schema` would otherwise count in the schema-less case.
        let document = query_doc(vec![
            Field::new("__schema")
                .with_selections(vec![
                    Field::new("types")
                        .with_selections(vec![Selection::field("name")])
                        .into(),
                ])
                .into(),
        ]);
        assert!(!uses_external_types(&document, &[], None));
        assert!(!uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_union_parent_disables_refinement() {
        // Media is a union, so its selections are not checked against fields.
        let document = query_doc(vec![
            Field::new("media")
                .with_selections(vec![Selection::field("title")])
                .into(),
        ]);
        assert!(uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_inline_fragment_switches_parent_type() {
        let schema = sample_schema();
        let on_book = query_doc(vec![
            Field::new("media")
                .with_selections(vec![
                    InlineFragment::on("Book", vec![Selection::field("title")]).into(),
                ])
                .into(),
        ]);
        assert!(uses_external_types(&on_book, &[], Some(&schema)));

        let unknown_on_book = query_doc(vec![
            Field::new("media")
                .with_selections(vec![
                    InlineFragment::on("Book", vec![Selection::field("pages")]).into(),
                ])
                .into(),
        ]);
        assert!(!uses_external_types(&unknown_on_book, &[], Some(&schema)));
    }

    #[test]
    fn test_anonymous_inline_fragment_inherits_parent_type() {
        let schema = sample_schema();
        let known = query_doc(vec![
            Field::new("user")
                .with_selections(vec![
                    InlineFragment::anonymous(vec![Selection::field("name")]).into(),
                ])
                .into(),
        ]);
        assert!(uses_external_types(&known, &[], Some(&schema)));

        // Without a type condition the fragment keeps refining against `User`,
        // so a field `User` does not declare gets pruned like any other.
        let unknown = query_doc(vec![
            Field::new("user")
                .with_selections(vec![
                    InlineFragment::anonymous(vec![Selection::field("nickname")]).into(),
                ])
                .into(),
        ]);
        assert!(!uses_external_types(&unknown, &[], Some(&schema)));
    }

    #[test]
    fn test_mutation_resolves_through_mutation_root() {
        let document = Document::new(vec![Definition::Operation(OperationDefinition {
            kind: OperationKind::Mutation,
            name: Some("CreateUser".to_string()),
            variables: Vec::new(),
            selection_set: SelectionSet::new(vec![
                Field::new("createUser")
                    .with_selections(vec![Selection::field("id")])
                    .into(),
            ]),
        })]);
        assert!(uses_external_types(&document, &[], Some(&sample_schema())));
    }

    #[test]
    fn test_local_fragment_resolves_through_type_condition() {
        let schema = sample_schema();
        let known = Document::new(vec![Definition::Fragment(FragmentDefinition::new(
            "UserFields",
            "User",
            vec![Selection::field("name")],
        ))]);
        assert!(uses_external_types(&known, &[], Some(&schema)));

        let unknown = Document::new(vec![Definition::Fragment(FragmentDefinition::new(
            "UserFields",
            "User",
            vec![Selection::field("nickname")],
        ))]);
        assert!(!uses_external_types(&unknown, &[], Some(&schema)));
    }
}
