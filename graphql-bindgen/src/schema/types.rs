//! Type reference definitions.
//!
//! A [`TypeRef`] points at a named schema type, possibly wrapped in any
//! number of non-null and list modifiers.

use std::fmt;

/// A possibly-wrapped reference to a named type.
///
/// Wrapper nesting is finite and always ends at a [`TypeRef::Named`] leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Reference to a named type (`User`, `String`, ...)
    Named(String),

    /// Non-null wrapper (`T!`)
    NonNull(Box<TypeRef>),

    /// List wrapper (`[T]`)
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Create a reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap a type in a non-null modifier.
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Wrap a type in a list modifier.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Whether the outermost modifier is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Name of the leaf type, looking through all wrappers.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.named_type(),
        }
    }
}

/// Prints the reference in GraphQL syntax (`[String!]!`).
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
    fn test_named_type_through_wrappers() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Post"))));
        assert_eq!(ty.named_type(), "Post");
    }

    #[test]
    fn test_is_non_null_only_checks_outermost() {
        assert!(TypeRef::non_null(TypeRef::named("Int")).is_non_null());
        assert!(!TypeRef::list(TypeRef::non_null(TypeRef::named("Int"))).is_non_null());
        assert!(!TypeRef::named("Int").is_non_null());
    }

    #[test]
    fn test_display_graphql_syntax() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String"))));
        assert_eq!(ty.to_string(), "[String!]!");
        assert_eq!(TypeRef::list(TypeRef::named("ID")).to_string(), "[ID]");
    }
}
