//! Generator configuration.

use std::collections::HashMap;

use crate::schema::Schema;

/// Module the generated binding imports its runtime helpers from.
pub const DEFAULT_BINDING_MODULE: &str = "graphql-binding";

/// How declarations are ordered in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationOrder {
    /// By variant tag name, then schema order within a kind
    #[default]
    Kind,

    /// By type name
    Name,
}

/// Generator configuration options.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Whether to emit description comments
    pub generate_docs: bool,

    /// Whether `String`/`Int`/`Float`/`Boolean` leaves render as TypeScript
    /// primitives instead of their schema names
    pub inline_builtin_scalars: bool,

    /// Declaration ordering
    pub declaration_order: DeclarationOrder,

    /// Module that provides `makeBindingClass`
    pub binding_module: String,

    /// Custom scalar mappings (scalar name -> TypeScript type)
    pub scalar_overrides: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            inline_builtin_scalars: true,
            declaration_order: DeclarationOrder::default(),
            binding_module: DEFAULT_BINDING_MODULE.to_string(),
            scalar_overrides: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit description comments.
    pub fn with_generate_docs(mut self, generate: bool) -> Self {
        self.generate_docs = generate;
        self
    }

    /// Set whether built-in scalar leaves are inlined.
    pub fn with_inline_builtin_scalars(mut self, inline: bool) -> Self {
        self.inline_builtin_scalars = inline;
        self
    }

    /// Set the declaration ordering.
    pub fn with_declaration_order(mut self, order: DeclarationOrder) -> Self {
        self.declaration_order = order;
        self
    }

    /// Set the binding runtime module.
    pub fn with_binding_module(mut self, module: impl Into<String>) -> Self {
        self.binding_module = module.into();
        self
    }

    /// Add a custom scalar mapping.
    pub fn with_scalar_override(
        mut self,
        scalar: impl Into<String>,
        ts_type: impl Into<String>,
    ) -> Self {
        self.scalar_overrides.insert(scalar.into(), ts_type.into());
        self
    }
}

/// Input to a single generation run.
///
/// The two paths are only echoed into the generated header; they are never
/// opened or resolved.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions<'a> {
    pub schema: &'a Schema,
    pub input_schema_path: &'a str,
    pub output_binding_path: &'a str,
}

impl<'a> GenerateOptions<'a> {
    /// Create generation options.
    pub fn new(
        schema: &'a Schema,
        input_schema_path: &'a str,
        output_binding_path: &'a str,
    ) -> Self {
        Self {
            schema,
            input_schema_path,
            output_binding_path,
        }
    }
}
