//! Introspection result loading.
//!
//! Converts the JSON returned by the standard GraphQL introspection query
//! into a [`Schema`]. Both the full response shape (`{"data": {"__schema": ...}}`)
//! and the bare shape (`{"__schema": ...}`) are accepted.
//!
//! Type-level entries with an unrecognised `kind` are skipped with a warning
//! so that a partially understood schema still produces output.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{
    EnumType, EnumValue, FieldDefinition, InputObjectType, InputValue, InterfaceType,
    ObjectType, OperationKind, ScalarType, Schema, TypeDefinition, TypeRef, UnionType,
};

/// Reason GraphQL servers report when `@deprecated` carries no argument.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    data: Option<IntrospectionData>,
    #[serde(rename = "__schema")]
    schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    query_type: Option<NamedTypeRef>,
    mutation_type: Option<NamedTypeRef>,
    subscription_type: Option<NamedTypeRef>,
    #[serde(default)]
    types: Vec<IntrospectionType>,
}

#[derive(Debug, Deserialize)]
struct NamedTypeRef {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionType {
    kind: String,
    name: Option<String>,
    description: Option<String>,
    fields: Option<Vec<IntrospectionField>>,
    input_fields: Option<Vec<IntrospectionInputValue>>,
    interfaces: Option<Vec<IntrospectionTypeRef>>,
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    ty: IntrospectionTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    ty: IntrospectionTypeRef,
    default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionTypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<IntrospectionTypeRef>>,
}

// =============================================================================
// Conversion
// =============================================================================

impl Schema {
    /// Load a schema from an introspection result in JSON text form.
    pub fn from_introspection_json(json: &str) -> SchemaResult<Schema> {
        let response: IntrospectionResponse = serde_json::from_str(json)?;
        convert_response(response)
    }

    /// Load a schema from an already parsed introspection result.
    pub fn from_introspection_value(value: serde_json::Value) -> SchemaResult<Schema> {
        let response: IntrospectionResponse = serde_json::from_value(value)?;
        convert_response(response)
    }
}

fn convert_response(response: IntrospectionResponse) -> SchemaResult<Schema> {
    let schema = response
        .data
        .and_then(|data| data.schema)
        .or(response.schema)
        .ok_or(SchemaError::MissingSchema)?;
    convert_schema(schema)
}

fn convert_schema(raw: IntrospectionSchema) -> SchemaResult<Schema> {
    let mut builder = Schema::builder();
    let mut skipped = 0usize;

    for ty in raw.types {
        match convert_type(ty)? {
            Some(definition) => builder = builder.add_type(definition),
            None => skipped += 1,
        }
    }

    let roots = [
        (OperationKind::Query, raw.query_type),
        (OperationKind::Mutation, raw.mutation_type),
        (OperationKind::Subscription, raw.subscription_type),
    ];
    for (kind, root) in roots {
        if let Some(root) = root {
            builder = builder.root_type(kind, root.name);
        }
    }

    let schema = builder.build();

    for kind in OperationKind::ALL {
        if let Some(name) = schema.root_type_name(kind) {
            if schema.get_type(name).is_none() {
                return Err(SchemaError::unknown_root(kind.as_str(), name));
            }
        }
    }

    debug!(
        types = schema.type_count(),
        skipped, "converted introspection result"
    );

    Ok(schema)
}

fn convert_type(raw: IntrospectionType) -> SchemaResult<Option<TypeDefinition>> {
    let Some(name) = raw.name else {
        warn!(kind = %raw.kind, "skipping unnamed introspection type");
        return Ok(None);
    };

    let definition = match raw.kind.as_str() {
        "OBJECT" => {
            let mut object = ObjectType::new(&name);
            object.description = raw.description;
            for field in raw.fields.unwrap_or_default() {
                let field = convert_field(&name, field)?;
                object.fields.insert(field.name.clone(), field);
            }
            object.interfaces = named_refs(raw.interfaces);
            TypeDefinition::Object(object)
        }
        "INTERFACE" => {
            let mut interface = InterfaceType::new(&name);
            interface.description = raw.description;
            for field in raw.fields.unwrap_or_default() {
                let field = convert_field(&name, field)?;
                interface.fields.insert(field.name.clone(), field);
            }
            TypeDefinition::Interface(interface)
        }
        "INPUT_OBJECT" => {
            let mut input = InputObjectType::new(&name);
            input.description = raw.description;
            for value in raw.input_fields.unwrap_or_default() {
                let value = convert_input_value(&name, value)?;
                let mut field = FieldDefinition::new(value.name, value.ty);
                field.description = value.description;
                field.default_value = value.default_value;
                input.fields.insert(field.name.clone(), field);
            }
            TypeDefinition::InputObject(input)
        }
        "UNION" => {
            let mut union = UnionType::new(&name, named_refs(raw.possible_types));
            union.description = raw.description;
            TypeDefinition::Union(union)
        }
        "ENUM" => {
            let values = raw
                .enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|value| EnumValue {
                    name: value.name,
                    description: value.description,
                    deprecation_reason: deprecation(value.is_deprecated, value.deprecation_reason),
                })
                .collect();
            TypeDefinition::Enum(EnumType {
                name,
                description: raw.description,
                values,
            })
        }
        "SCALAR" => TypeDefinition::Scalar(ScalarType {
            name,
            description: raw.description,
        }),
        other => {
            warn!(kind = other, name = %name, "skipping introspection type of unknown kind");
            return Ok(None);
        }
    };

    Ok(Some(definition))
}

fn convert_field(owner: &str, raw: IntrospectionField) -> SchemaResult<FieldDefinition> {
    let location = format!("{}.{}", owner, raw.name);
    let mut field = FieldDefinition::new(&raw.name, convert_type_ref(&location, raw.ty)?);
    field.description = raw.description;
    field.deprecation_reason = deprecation(raw.is_deprecated, raw.deprecation_reason);
    for arg in raw.args {
        field.args.push(convert_input_value(&location, arg)?);
    }
    Ok(field)
}

fn convert_input_value(owner: &str, raw: IntrospectionInputValue) -> SchemaResult<InputValue> {
    let location = format!("{}.{}", owner, raw.name);
    Ok(InputValue {
        ty: convert_type_ref(&location, raw.ty)?,
        name: raw.name,
        description: raw.description,
        default_value: raw.default_value,
    })
}

fn convert_type_ref(location: &str, raw: IntrospectionTypeRef) -> SchemaResult<TypeRef> {
    match raw.kind.as_str() {
        "NON_NULL" | "LIST" => {
            let inner = raw.of_type.ok_or_else(|| {
                SchemaError::invalid_type_ref(location, format!("{} without ofType", raw.kind))
            })?;
            let inner = convert_type_ref(location, *inner)?;
            if raw.kind == "NON_NULL" {
                if inner.is_non_null() {
                    return Err(SchemaError::invalid_type_ref(
                        location,
                        "NON_NULL wrapping NON_NULL",
                    ));
                }
                Ok(TypeRef::non_null(inner))
            } else {
                Ok(TypeRef::list(inner))
            }
        }
        _ => raw.name.map(TypeRef::Named).ok_or_else(|| {
            SchemaError::invalid_type_ref(location, format!("{} reference without name", raw.kind))
        }),
    }
}

fn named_refs(refs: Option<Vec<IntrospectionTypeRef>>) -> Vec<String> {
    refs.unwrap_or_default()
        .into_iter()
        .filter_map(|r| r.name)
        .collect()
}

fn deprecation(is_deprecated: bool, reason: Option<String>) -> Option<String> {
    if is_deprecated {
        Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
    } else {
        None
    }
}
