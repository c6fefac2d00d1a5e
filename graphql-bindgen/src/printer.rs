//! Schema definition language printing.
//!
//! Prints a [`Schema`] back to SDL. The output is canonical for a given
//! schema: types appear in schema order, built-in scalars and introspection
//! types are omitted, and the text always ends with a single newline.

use crate::generator::scalar::BUILTIN_SCALARS;
use crate::introspection::DEFAULT_DEPRECATION_REASON;
use crate::schema::{
    EnumType, FieldDefinition, InputObjectType, InputValue, InterfaceType, ObjectType,
    OperationKind, ScalarType, Schema, TypeDefinition, UnionType,
};

const INDENT: &str = "  ";

/// Print a schema as SDL.
pub fn print_schema(schema: &Schema) -> String {
    let mut blocks = Vec::new();

    if let Some(definition) = print_schema_definition(schema) {
        blocks.push(definition);
    }

    blocks.extend(
        schema
            .types()
            .filter(|t| !t.is_introspection() && !is_builtin_scalar(t))
            .map(print_type),
    );

    if blocks.is_empty() {
        return String::new();
    }

    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

fn is_builtin_scalar(definition: &TypeDefinition) -> bool {
    matches!(definition, TypeDefinition::Scalar(s) if BUILTIN_SCALARS.contains(&s.name.as_str()))
}

/// The `schema { ... }` block, needed only when a root uses a custom name.
fn print_schema_definition(schema: &Schema) -> Option<String> {
    let roots: Vec<(OperationKind, &str)> = OperationKind::ALL
        .iter()
        .filter_map(|kind| schema.root_type_name(*kind).map(|name| (*kind, name)))
        .collect();

    if roots
        .iter()
        .all(|(kind, name)| *name == kind.default_type_name())
    {
        return None;
    }

    let lines: Vec<String> = roots
        .iter()
        .map(|(kind, name)| format!("{}{}: {}", INDENT, kind.as_str(), name))
        .collect();
    Some(format!("schema {{\n{}\n}}", lines.join("\n")))
}

fn print_type(definition: &TypeDefinition) -> String {
    match definition {
        TypeDefinition::Object(object) => print_object(object),
        TypeDefinition::Interface(interface) => print_interface(interface),
        TypeDefinition::InputObject(input) => print_input_object(input),
        TypeDefinition::Union(union) => print_union(union),
        TypeDefinition::Enum(enumeration) => print_enum(enumeration),
        TypeDefinition::Scalar(scalar) => print_scalar(scalar),
    }
}

fn print_object(object: &ObjectType) -> String {
    let implements = if object.interfaces.is_empty() {
        String::new()
    } else {
        format!(" implements {}", object.interfaces.join(" & "))
    };

    format!(
        "{}type {}{}{}",
        print_description(object.description.as_deref(), ""),
        object.name,
        implements,
        print_fields(object.fields.values())
    )
}

fn print_interface(interface: &InterfaceType) -> String {
    format!(
        "{}interface {}{}",
        print_description(interface.description.as_deref(), ""),
        interface.name,
        print_fields(interface.fields.values())
    )
}

fn print_input_object(input: &InputObjectType) -> String {
    format!(
        "{}input {}{}",
        print_description(input.description.as_deref(), ""),
        input.name,
        print_fields(input.fields.values())
    )
}

fn print_union(union: &UnionType) -> String {
    let members = if union.members.is_empty() {
        String::new()
    } else {
        format!(" = {}", union.members.join(" | "))
    };

    format!(
        "{}union {}{}",
        print_description(union.description.as_deref(), ""),
        union.name,
        members
    )
}

fn print_enum(enumeration: &EnumType) -> String {
    let values: Vec<String> = enumeration
        .values
        .iter()
        .map(|value| {
            format!(
                "{}{}{}{}",
                print_description(value.description.as_deref(), INDENT),
                INDENT,
                value.name,
                print_deprecated(value.deprecation_reason.as_deref())
            )
        })
        .collect();

    format!(
        "{}enum {}{}",
        print_description(enumeration.description.as_deref(), ""),
        enumeration.name,
        print_block(&values)
    )
}

fn print_scalar(scalar: &ScalarType) -> String {
    format!(
        "{}scalar {}",
        print_description(scalar.description.as_deref(), ""),
        scalar.name
    )
}

// =============================================================================
// Fields and Arguments
// =============================================================================

fn print_fields<'f>(fields: impl Iterator<Item = &'f FieldDefinition>) -> String {
    let lines: Vec<String> = fields.map(print_field).collect();
    print_block(&lines)
}

fn print_block(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!(" {{\n{}\n}}", lines.join("\n"))
    }
}

fn print_field(field: &FieldDefinition) -> String {
    format!(
        "{}{}{}{}: {}{}{}",
        print_description(field.description.as_deref(), INDENT),
        INDENT,
        field.name,
        print_args(&field.args),
        field.ty,
        print_default(field.default_value.as_deref()),
        print_deprecated(field.deprecation_reason.as_deref())
    )
}

/// Arguments inline, or one per line when any of them is described.
fn print_args(args: &[InputValue]) -> String {
    if args.is_empty() {
        return String::new();
    }

    if args.iter().all(|arg| arg.description.is_none()) {
        let args: Vec<String> = args.iter().map(print_input_value).collect();
        return format!("({})", args.join(", "));
    }

    let nested = format!("{}{}", INDENT, INDENT);
    let lines: Vec<String> = args
        .iter()
        .map(|arg| {
            format!(
                "{}{}{}",
                print_description(arg.description.as_deref(), &nested),
                nested,
                print_input_value(arg)
            )
        })
        .collect();
    format!("(\n{}\n{})", lines.join("\n"), INDENT)
}

fn print_input_value(value: &InputValue) -> String {
    format!(
        "{}: {}{}",
        value.name,
        value.ty,
        print_default(value.default_value.as_deref())
    )
}

fn print_default(default_value: Option<&str>) -> String {
    default_value
        .map(|value| format!(" = {}", value))
        .unwrap_or_default()
}

fn print_deprecated(reason: Option<&str>) -> String {
    match reason {
        None => String::new(),
        Some(DEFAULT_DEPRECATION_REASON) => " @deprecated".to_string(),
        Some(reason) => format!(
            " @deprecated(reason: {})",
            serde_json::Value::String(reason.to_string())
        ),
    }
}

// =============================================================================
// Descriptions
// =============================================================================

/// Block-string description followed by a newline, or nothing.
fn print_description(description: Option<&str>, indent: &str) -> String {
    let Some(text) = description else {
        return String::new();
    };

    let text = text.replace("\"\"\"", "\\\"\"\"");
    let leading_space = text.starts_with([' ', '\t']);
    let closes_early = text.ends_with(['"', '\\']);
    if !text.contains('\n') && !leading_space && !closes_early {
        return format!("{}\"\"\"{}\"\"\"\n", indent, text);
    }

    // Block strings strip common indentation from every line but the first,
    // so a first line with leading whitespace stays on the opening quotes.
    let mut lines = text.lines();
    let mut output = format!("{}\"\"\"", indent);
    if leading_space {
        output.push_str(lines.next().unwrap_or_default());
    }
    output.push('\n');

    for line in lines {
        if !line.is_empty() {
            output.push_str(indent);
            output.push_str(line);
        }
        output.push('\n');
    }

    output.push_str(indent);
    output.push_str("\"\"\"\n");
    output
}
