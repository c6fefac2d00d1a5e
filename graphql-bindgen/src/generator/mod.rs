//! TypeScript binding generation.
//!
//! The [`BindingGenerator`] drives the individual renderers:
//!
//! 1. [`ScalarMapper`] maps scalar names to TypeScript primitives.
//! 2. [`TypeRenderer`] renders wrapped type references.
//! 3. [`DeclarationRenderer`] emits one declaration per named type.
//! 4. [`OperationRenderer`] emits the call signatures of each root.
//! 5. [`DocumentAssembler`] joins everything into one module.
//!
//! Generation is a pure function of the schema and the configuration:
//! the same inputs always produce byte-identical output.

pub mod assembler;
pub mod config;
pub mod declaration;
pub mod operation;
pub mod scalar;
pub mod type_ref;

pub use assembler::{escape_template_literal, DocumentAssembler, DocumentParts};
pub use config::{DeclarationOrder, GenerateOptions, GeneratorConfig, DEFAULT_BINDING_MODULE};
pub use declaration::{ordered_types, DeclarationRenderer};
pub use operation::OperationRenderer;
pub use scalar::{Position, ScalarMapper};
pub use type_ref::TypeRenderer;

use tracing::debug;

use crate::printer::print_schema;
use crate::schema::OperationKind;

/// Generates TypeScript bindings from a schema.
#[derive(Debug, Clone, Default)]
pub struct BindingGenerator {
    config: GeneratorConfig,
    scalars: ScalarMapper,
}

impl BindingGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let scalars = ScalarMapper::with_overrides(config.scalar_overrides.clone());
        Self { config, scalars }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the complete binding document.
    pub fn generate(&self, options: &GenerateOptions<'_>) -> String {
        let schema = options.schema;
        let types = TypeRenderer::new(&self.scalars, self.config.inline_builtin_scalars);

        let operations = OperationRenderer::new(types.clone());
        let parts = DocumentParts {
            operations: OperationKind::ALL
                .iter()
                .map(|kind| (*kind, operations.render(schema, *kind)))
                .collect(),
            declarations: DeclarationRenderer::new(&self.config, &self.scalars).render_all(schema),
            type_defs: print_schema(schema),
        };

        let output = DocumentAssembler::new(&self.config).assemble(options, &parts);

        debug!(
            types = schema.type_count(),
            declarations = parts.declarations.len(),
            bytes = output.len(),
            "generated binding"
        );

        output
    }
}

/// Generate a binding document with the default configuration.
pub fn generate_code(options: &GenerateOptions<'_>) -> String {
    BindingGenerator::default().generate(options)
}
