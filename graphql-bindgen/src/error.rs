//! Error types for schema loading.
//!
//! Rendering itself never fails; errors only arise while turning an
//! introspection result into a [`Schema`](crate::schema::Schema).

use thiserror::Error;

/// Result type alias for schema loading.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error raised while loading a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input is not valid JSON or does not match the introspection shape.
    #[error("Invalid introspection JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither `data.__schema` nor `__schema` is present.
    #[error("Introspection result has no __schema object")]
    MissingSchema,

    /// A type reference is missing its name or inner type.
    #[error("Invalid type reference in '{location}': {message}")]
    InvalidTypeRef { location: String, message: String },

    /// A root operation type is not defined in the type list.
    #[error("Root {operation} type '{name}' is not defined in the schema")]
    UnknownRootType { operation: String, name: String },
}

impl SchemaError {
    /// Create an invalid type reference error.
    pub fn invalid_type_ref(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create an unknown root type error.
    pub fn unknown_root(operation: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownRootType {
            operation: operation.into(),
            name: name.into(),
        }
    }
}
