//! Document assembly.
//!
//! Stitches the rendered pieces into the final TypeScript module:
//! header, import, the binding instance/constructor interfaces, the
//! exported binding class, the type declarations and the embedded schema.

use crate::generator::config::{GenerateOptions, GeneratorConfig};
use crate::schema::OperationKind;

/// Pre-rendered pieces of a binding document.
#[derive(Debug, Clone, Default)]
pub struct DocumentParts {
    /// Object type per operation category, in [`OperationKind::ALL`] order
    pub operations: Vec<(OperationKind, String)>,
    /// Type declarations in document order
    pub declarations: Vec<String>,
    /// Printed schema, unescaped
    pub type_defs: String,
}

/// Assembles binding documents.
#[derive(Debug, Clone)]
pub struct DocumentAssembler<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Assemble the document. Pure string composition.
    pub fn assemble(&self, options: &GenerateOptions<'_>, parts: &DocumentParts) -> String {
        let sections = [
            self.header(options),
            self.imports(),
            self.binding_instance(&parts.operations),
            binding_constructor(),
            binding_export(),
            types_section(&parts.declarations),
            type_defs_section(&parts.type_defs),
        ];

        let mut output = sections.join("\n\n");
        output.push('\n');
        output
    }

    fn header(&self, options: &GenerateOptions<'_>) -> String {
        format!(
            "// Code generated by graphql-bindgen. DO NOT EDIT.\n// Schema: {}\n// Binding: {}",
            options.input_schema_path, options.output_binding_path
        )
    }

    fn imports(&self) -> String {
        format!(
            "import {{ makeBindingClass }} from '{}'",
            self.config.binding_module
        )
    }

    fn binding_instance(&self, operations: &[(OperationKind, String)]) -> String {
        let lines: Vec<String> = operations
            .iter()
            .map(|(kind, body)| format!("  {}: {}", kind.as_str(), body))
            .collect();

        format!("export interface BindingInstance {{\n{}\n}}", lines.join("\n"))
    }
}

fn binding_constructor() -> String {
    "export interface BindingConstructor<T> {\n  new(...args: any[]): T\n}".to_string()
}

fn binding_export() -> String {
    "export const Binding = makeBindingClass<BindingConstructor<BindingInstance>>({ typeDefs: () => typeDefs })"
        .to_string()
}

fn banner(title: &str) -> String {
    format!("/**\n * {}\n */", title)
}

fn types_section(declarations: &[String]) -> String {
    if declarations.is_empty() {
        return banner("Types");
    }
    format!("{}\n\n{}", banner("Types"), declarations.join("\n\n"))
}

fn type_defs_section(type_defs: &str) -> String {
    format!(
        "{}\n\nconst typeDefs = `{}`",
        banner("Type Defs"),
        escape_template_literal(type_defs)
    )
}

/// Escape text for a JavaScript template literal.
///
/// Backslash first, so the escapes added for `` ` `` and `${` are not doubled.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
