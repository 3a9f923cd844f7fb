//! Type reference representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a schema type, with list and non-null wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// A plain named type (`User`).
    Named(String),
    /// A non-null wrapper (`User!`).
    NonNull(Box<TypeRef>),
    /// A list wrapper (`[User]`).
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Create a plain named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap a type reference in a non-null marker.
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Wrap a type reference in a list.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The named type at the bottom of the wrapping chain.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_unwraps_modifiers() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("User"))));
        assert_eq!(ty.base_name(), "User");
    }

    #[test]
    fn test_display_graphql_syntax() {
        assert_eq!(TypeRef::named("ID").to_string(), "ID");
        assert_eq!(TypeRef::non_null(TypeRef::named("ID")).to_string(), "ID!");
        assert_eq!(
            TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("User"))))
                .to_string(),
            "[User!]!"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let ty = TypeRef::list(TypeRef::named("Post"));
        let json = serde_json::to_string(&ty).expect("Failed to serialize");
        let back: TypeRef = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, ty);
    }
}
