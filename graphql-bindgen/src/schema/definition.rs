//! Named type definitions.
//!
//! This module defines the six kinds of named entries a schema can hold,
//! together with their fields, arguments and enum values.

use indexmap::IndexMap;

use super::types::TypeRef;

/// A named entry in the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    /// Object type with fields and implemented interfaces
    Object(ObjectType),

    /// Interface type with fields
    Interface(InterfaceType),

    /// Input object type used in argument positions
    InputObject(InputObjectType),

    /// Union of object types
    Union(UnionType),

    /// Enumeration of named values
    Enum(EnumType),

    /// Scalar (built-in or custom)
    Scalar(ScalarType),
}

impl TypeDefinition {
    /// The name of this type.
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(t) => &t.name,
            TypeDefinition::Interface(t) => &t.name,
            TypeDefinition::InputObject(t) => &t.name,
            TypeDefinition::Union(t) => &t.name,
            TypeDefinition::Enum(t) => &t.name,
            TypeDefinition::Scalar(t) => &t.name,
        }
    }

    /// The description of this type, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Object(t) => t.description.as_deref(),
            TypeDefinition::Interface(t) => t.description.as_deref(),
            TypeDefinition::InputObject(t) => t.description.as_deref(),
            TypeDefinition::Union(t) => t.description.as_deref(),
            TypeDefinition::Enum(t) => t.description.as_deref(),
            TypeDefinition::Scalar(t) => t.description.as_deref(),
        }
    }

    /// The variant tag of this type.
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
        }
    }

    /// Fields of an object or interface type.
    ///
    /// Returns `None` for every other kind, including input objects.
    pub fn output_fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            TypeDefinition::Object(t) => Some(&t.fields),
            TypeDefinition::Interface(t) => Some(&t.fields),
            _ => None,
        }
    }

    /// Whether this is an introspection type (`__Schema`, `__Type`, ...).
    pub fn is_introspection(&self) -> bool {
        self.name().starts_with("__")
    }
}

/// Variant tag of a [`TypeDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

impl TypeKind {
    /// Tag name used when ordering declarations.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Enum => "Enum",
            TypeKind::InputObject => "InputObject",
            TypeKind::Interface => "Interface",
            TypeKind::Object => "Object",
            TypeKind::Scalar => "Scalar",
            TypeKind::Union => "Union",
        }
    }
}

// =============================================================================
// Composite Types
// =============================================================================

/// Object type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    /// Fields in declaration order
    pub fields: IndexMap<String, FieldDefinition>,
    /// Names of implemented interfaces
    pub interfaces: Vec<String>,
}

impl ObjectType {
    /// Create an empty object type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field, replacing any field of the same name.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDefinition>,
}

impl InterfaceType {
    /// Create an empty interface type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// Input object type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDefinition>,
}

impl InputObjectType {
    /// Create an empty input object type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// Union type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    /// Member type names in declaration order
    pub members: Vec<String>,
}

impl UnionType {
    /// Create a union over the given members.
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

impl EnumType {
    /// Create an enum from plain value names.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            values: values.into_iter().map(EnumValue::new).collect(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single enum value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl EnumValue {
    /// Create a value with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    /// Create a scalar type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Fields
// =============================================================================

/// A field on an object, interface or input object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
    /// Arguments (object and interface fields only)
    pub args: Vec<InputValue>,
    /// Default value literal (input object fields only)
    pub default_value: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl FieldDefinition {
    /// Create a field with the given type.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            args: Vec::new(),
            default_value: None,
            deprecation_reason: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    /// Set the default value literal.
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Mark the field as deprecated.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Whether the field may be absent (its type is not non-null).
    pub fn is_optional(&self) -> bool {
        !self.ty.is_non_null()
    }
}

/// A field argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
    /// Default value in GraphQL literal syntax (`10`, `"abc"`, `[A, B]`)
    pub default_value: Option<String>,
}

impl InputValue {
    /// Create an argument with the given type.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            default_value: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value literal.
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}
