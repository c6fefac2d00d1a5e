//! Declaration rendering.
//!
//! Produces one TypeScript declaration block per named schema type:
//!
//! - objects and interfaces become `export interface` (objects with an
//!   `extends` clause for their interfaces),
//! - input objects become structural `export type X = { ... }`,
//! - unions and enums become `export type` aliases over their members,
//! - scalars become aliases of their mapped primitive (`ID` emits two).
//!
//! Root operation types are never declared here.

use tracing::debug;

use crate::generator::config::{DeclarationOrder, GeneratorConfig};
use crate::generator::scalar::{Position, ScalarMapper, ID_SCALAR};
use crate::generator::type_ref::TypeRenderer;
use crate::schema::{
    EnumType, FieldDefinition, InputObjectType, InterfaceType, ObjectType, ScalarType, Schema,
    TypeDefinition, UnionType,
};

const INDENT: &str = "  ";

/// Renders type declarations.
#[derive(Debug, Clone)]
pub struct DeclarationRenderer<'a> {
    config: &'a GeneratorConfig,
    scalars: &'a ScalarMapper,
    types: TypeRenderer<'a>,
}

impl<'a> DeclarationRenderer<'a> {
    /// Create a declaration renderer.
    pub fn new(config: &'a GeneratorConfig, scalars: &'a ScalarMapper) -> Self {
        Self {
            config,
            scalars,
            types: TypeRenderer::new(scalars, config.inline_builtin_scalars),
        }
    }

    /// Render every non-root, non-introspection type in document order.
    pub fn render_all(&self, schema: &Schema) -> Vec<String> {
        let declarations: Vec<String> = ordered_types(schema, self.config.declaration_order)
            .into_iter()
            .map(|definition| self.render(definition))
            .collect();

        debug!(count = declarations.len(), "rendered type declarations");
        declarations
    }

    /// Render a single type declaration.
    pub fn render(&self, definition: &TypeDefinition) -> String {
        match definition {
            TypeDefinition::Object(object) => self.render_object(object),
            TypeDefinition::Interface(interface) => self.render_interface(interface),
            TypeDefinition::InputObject(input) => self.render_input_object(input),
            TypeDefinition::Union(union) => self.render_union(union),
            TypeDefinition::Enum(enumeration) => self.render_enum(enumeration),
            TypeDefinition::Scalar(scalar) => self.render_scalar(scalar),
        }
    }

    // =========================================================================
    // Object-like Types
    // =========================================================================

    fn render_object(&self, object: &ObjectType) -> String {
        let extends = if object.interfaces.is_empty() {
            String::new()
        } else {
            format!(" extends {}", object.interfaces.join(", "))
        };

        format!(
            "{}export interface {}{} {}",
            self.type_description(object.description.as_deref()),
            object.name,
            extends,
            self.field_block(object.fields.values(), Position::Output)
        )
    }

    fn render_interface(&self, interface: &InterfaceType) -> String {
        format!(
            "{}export interface {} {}",
            self.type_description(interface.description.as_deref()),
            interface.name,
            self.field_block(interface.fields.values(), Position::Output)
        )
    }

    fn render_input_object(&self, input: &InputObjectType) -> String {
        format!(
            "{}export type {} = {}",
            self.type_description(input.description.as_deref()),
            input.name,
            self.field_block(input.fields.values(), Position::Input)
        )
    }

    fn field_block<'f>(
        &self,
        fields: impl Iterator<Item = &'f FieldDefinition>,
        position: Position,
    ) -> String {
        let lines: Vec<String> = fields.map(|field| self.render_field(field, position)).collect();

        if lines.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{}\n}}", lines.join("\n"))
        }
    }

    /// Render one field line: `name[?]: type`, `?` iff the type is nullable.
    fn render_field(&self, field: &FieldDefinition, position: Position) -> String {
        let ty = match position {
            Position::Output => self.types.render_output_type(&field.ty),
            Position::Input => self.types.render_input_type(&field.ty),
        };
        let marker = if field.is_optional() { "?" } else { "" };

        format!(
            "{}{}{}{}: {}",
            self.field_doc(field),
            INDENT,
            field.name,
            marker,
            ty
        )
    }

    // =========================================================================
    // Aliases
    // =========================================================================

    fn render_union(&self, union: &UnionType) -> String {
        let members = if union.members.is_empty() {
            "never".to_string()
        } else {
            union.members.join(" | ")
        };

        format!(
            "{}export type {} = {}",
            self.type_description(union.description.as_deref()),
            union.name,
            members
        )
    }

    fn render_enum(&self, enumeration: &EnumType) -> String {
        let values = if enumeration.values.is_empty() {
            "never".to_string()
        } else {
            enumeration
                .values
                .iter()
                .map(|value| format!("'{}'", value.name))
                .collect::<Vec<_>>()
                .join(&format!(" |\n{}", INDENT))
        };

        format!(
            "{}export type {} = {}",
            self.type_description(enumeration.description.as_deref()),
            enumeration.name,
            values
        )
    }

    fn render_scalar(&self, scalar: &ScalarType) -> String {
        let description = self.type_description(scalar.description.as_deref());

        if scalar.name == ID_SCALAR {
            return format!(
                "{}export type {}{} = {}\nexport type {}{} = {}",
                description,
                scalar.name,
                Position::Input.id_suffix(),
                self.scalars.map_scalar_at(&scalar.name, Position::Input),
                scalar.name,
                Position::Output.id_suffix(),
                self.scalars.map_scalar_at(&scalar.name, Position::Output),
            );
        }

        format!(
            "{}export type {} = {}",
            description,
            scalar.name,
            self.scalars.map_scalar(&scalar.name)
        )
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Block comment placed above a type declaration, or nothing.
    fn type_description(&self, description: Option<&str>) -> String {
        match description {
            Some(text) if self.config.generate_docs => {
                let lines: String = escape_comment(text)
                    .lines()
                    .map(|line| format!(" * {}\n", line).replace(" * \n", " *\n"))
                    .collect();
                format!("/*\n{} */\n", lines)
            }
            _ => String::new(),
        }
    }

    /// JSDoc lines placed above a field, each ending in a newline, or nothing.
    fn field_doc(&self, field: &FieldDefinition) -> String {
        if !self.config.generate_docs {
            return String::new();
        }

        let mut lines: Vec<String> = field
            .description
            .as_deref()
            .map(|text| escape_comment(text).lines().map(str::to_string).collect())
            .unwrap_or_default();
        if let Some(reason) = &field.deprecation_reason {
            lines.push(format!("@deprecated {}", escape_comment(reason)));
        }

        match lines.as_slice() {
            [] => String::new(),
            [line] => format!("{}/** {} */\n", INDENT, line),
            _ => {
                let body: String = lines
                    .iter()
                    .map(|line| format!("{} * {}\n", INDENT, line))
                    .collect();
                format!("{}/**\n{}{} */\n", INDENT, body, INDENT)
            }
        }
    }
}

/// Types that receive a declaration, in document order.
///
/// With [`DeclarationOrder::Kind`] the sort is stable, so types of the same
/// kind keep schema order.
pub fn ordered_types(schema: &Schema, order: DeclarationOrder) -> Vec<&TypeDefinition> {
    let mut types: Vec<&TypeDefinition> = schema
        .types()
        .filter(|t| !t.is_introspection() && !schema.is_root_type(t.name()))
        .collect();

    match order {
        DeclarationOrder::Kind => types.sort_by_key(|t| t.kind().as_str()),
        DeclarationOrder::Name => types.sort_by(|a, b| a.name().cmp(b.name())),
    }

    types
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}
