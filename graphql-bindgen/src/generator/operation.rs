//! Operation signature rendering.
//!
//! Each root operation category becomes an object literal type mapping the
//! root's field names to binding call signatures:
//!
//! ```text
//! {
//!     users: (args, info, context) => Promise<User[]>
//!     user: (args, info, context) => Promise<User | null>
//!   }
//! ```
//!
//! Arguments and context are left unconstrained.

use tracing::debug;

use crate::generator::type_ref::TypeRenderer;
use crate::schema::{FieldDefinition, OperationKind, Schema};

const ENTRY_INDENT: &str = "    ";
const CLOSE_INDENT: &str = "  ";

/// Renders root operation categories.
#[derive(Debug, Clone)]
pub struct OperationRenderer<'a> {
    types: TypeRenderer<'a>,
}

impl<'a> OperationRenderer<'a> {
    /// Create an operation renderer.
    pub fn new(types: TypeRenderer<'a>) -> Self {
        Self { types }
    }

    /// Render the object type for one category.
    ///
    /// Absent roots, and roots with no fields, render as `{}`.
    pub fn render(&self, schema: &Schema, kind: OperationKind) -> String {
        let fields = schema
            .root_type(kind)
            .and_then(|root| root.output_fields())
            .filter(|fields| !fields.is_empty());

        let Some(fields) = fields else {
            debug!(operation = kind.as_str(), "no root fields");
            return "{}".to_string();
        };

        let entries: Vec<String> = fields
            .values()
            .map(|field| format!("{}{}", ENTRY_INDENT, self.render_operation(field)))
            .collect();

        debug!(
            operation = kind.as_str(),
            count = entries.len(),
            "rendered operations"
        );

        format!("{{\n{}\n{}}}", entries.join("\n"), CLOSE_INDENT)
    }

    /// Render a single signature: `name: (args, info, context) => Promise<T>`.
    ///
    /// A nullable result adds `| null` inside the promise.
    pub fn render_operation(&self, field: &FieldDefinition) -> String {
        let result = self.types.render_output_type(&field.ty);
        let nullable = if field.is_optional() { " | null" } else { "" };

        format!(
            "{}: (args, info, context) => Promise<{}{}>",
            field.name, result, nullable
        )
    }
}
