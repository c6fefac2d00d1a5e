//! Schema model.
//!
//! This module defines the in-memory, read-only view of a GraphQL schema
//! that the generator consumes. A [`Schema`] is built once (by hand through
//! [`SchemaBuilder`], or from an introspection result) and never mutated
//! during generation.

pub mod definition;
pub mod types;

use indexmap::IndexMap;

pub use definition::{
    EnumType, EnumValue, FieldDefinition, InputObjectType, InputValue, InterfaceType, ObjectType,
    ScalarType, TypeDefinition, TypeKind, UnionType,
};
pub use types::TypeRef;

/// The three root operation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// All categories in rendering order.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// Lowercase keyword (`query`, `mutation`, `subscription`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Conventional root type name (`Query`, `Mutation`, `Subscription`).
    pub fn default_type_name(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

/// A complete GraphQL schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl Schema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// All types in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// Look up a type by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Number of types in the schema.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Name of the root type bound to an operation category.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Root type definition bound to an operation category.
    pub fn root_type(&self, kind: OperationKind) -> Option<&TypeDefinition> {
        self.root_type_name(kind).and_then(|name| self.get_type(name))
    }

    /// Whether the named type is bound as any operation root.
    pub fn is_root_type(&self, name: &str) -> bool {
        OperationKind::ALL
            .iter()
            .any(|kind| self.root_type_name(*kind) == Some(name))
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Add a type definition. A later type with the same name replaces the
    /// earlier one but keeps its position.
    pub fn add_type(mut self, definition: TypeDefinition) -> Self {
        self.schema
            .types
            .insert(definition.name().to_string(), definition);
        self
    }

    /// Add an object type.
    pub fn object(self, object: ObjectType) -> Self {
        self.add_type(TypeDefinition::Object(object))
    }

    /// Add an interface type.
    pub fn interface(self, interface: InterfaceType) -> Self {
        self.add_type(TypeDefinition::Interface(interface))
    }

    /// Add an input object type.
    pub fn input_object(self, input: InputObjectType) -> Self {
        self.add_type(TypeDefinition::InputObject(input))
    }

    /// Add a union type.
    pub fn union(self, union: UnionType) -> Self {
        self.add_type(TypeDefinition::Union(union))
    }

    /// Add an enum type.
    pub fn enumeration(self, enumeration: EnumType) -> Self {
        self.add_type(TypeDefinition::Enum(enumeration))
    }

    /// Add a scalar type.
    pub fn scalar(self, scalar: ScalarType) -> Self {
        self.add_type(TypeDefinition::Scalar(scalar))
    }

    /// Bind the query root.
    pub fn query_type(mut self, name: impl Into<String>) -> Self {
        self.schema.query_type = Some(name.into());
        self
    }

    /// Bind the mutation root.
    pub fn mutation_type(mut self, name: impl Into<String>) -> Self {
        self.schema.mutation_type = Some(name.into());
        self
    }

    /// Bind the subscription root.
    pub fn subscription_type(mut self, name: impl Into<String>) -> Self {
        self.schema.subscription_type = Some(name.into());
        self
    }

    /// Bind a root by category.
    pub fn root_type(self, kind: OperationKind, name: impl Into<String>) -> Self {
        match kind {
            OperationKind::Query => self.query_type(name),
            OperationKind::Mutation => self.mutation_type(name),
            OperationKind::Subscription => self.subscription_type(name),
        }
    }

    /// Finish building.
    pub fn build(self) -> Schema {
        self.schema
    }
}
