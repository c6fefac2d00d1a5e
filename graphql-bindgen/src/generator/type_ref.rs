//! Type reference rendering.
//!
//! Turns a [`TypeRef`] into a TypeScript type expression. Output and input
//! positions differ in two places, and both are kept as explicit branches:
//!
//! - the `ID` leaf is suffixed `_Output` or `_Input`;
//! - an input list also accepts a bare element (`T[] | T`).
//!
//! Non-null wrappers are consumed. Optionality is expressed by the caller
//! (`?` on a field, `| null` on an operation result).

use crate::generator::scalar::{Position, ScalarMapper, ID_SCALAR};
use crate::schema::TypeRef;

/// Renders type references for a given scalar mapping.
#[derive(Debug, Clone)]
pub struct TypeRenderer<'a> {
    scalars: &'a ScalarMapper,
    inline_builtin_scalars: bool,
}

impl<'a> TypeRenderer<'a> {
    /// Create a renderer.
    pub fn new(scalars: &'a ScalarMapper, inline_builtin_scalars: bool) -> Self {
        Self {
            scalars,
            inline_builtin_scalars,
        }
    }

    /// Render a type in a read position (field results).
    pub fn render_output_type(&self, ty: &TypeRef) -> String {
        self.render(ty, Position::Output)
    }

    /// Render a type in a write position (input object fields, arguments).
    pub fn render_input_type(&self, ty: &TypeRef) -> String {
        self.render(ty, Position::Input)
    }

    fn render(&self, ty: &TypeRef, position: Position) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.render(inner, position),
            TypeRef::List(inner) => match position {
                Position::Output => format!("{}[]", self.render(inner, position)),
                Position::Input => {
                    let inner = self.render(inner, position);
                    format!("{}[] | {}", inner, inner)
                }
            },
            TypeRef::Named(name) => self.render_leaf(name, position),
        }
    }

    fn render_leaf(&self, name: &str, position: Position) -> String {
        if name == ID_SCALAR {
            return format!("{}{}", name, position.id_suffix());
        }
        if self.inline_builtin_scalars {
            if let Some(primitive) = self.scalars.primitive(name) {
                return primitive.to_string();
            }
        }
        name.to_string()
    }
}
