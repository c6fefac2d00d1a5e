//! Binding generation from files on disk.
//!
//! Reads the introspection result named by the configuration and runs the
//! library generator over it.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use graphql_bindgen::{BindingGenerator, GenerateOptions, Schema};
use std::path::{Path, PathBuf};
use tracing::info;

/// Generated binding ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedBinding {
    /// Complete TypeScript content.
    pub content: String,

    /// Where the binding belongs.
    pub output_path: PathBuf,

    /// Number of types in the source schema.
    pub type_count: usize,
}

/// Load a schema from an introspection result file.
pub fn load_schema(path: &Path) -> CliResult<Schema> {
    let json = std::fs::read_to_string(path).map_err(|e| CliError::ReadSchema {
        path: path.to_path_buf(),
        source: e,
    })?;

    let schema = Schema::from_introspection_json(&json).map_err(|e| CliError::Schema {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        path = %path.display(),
        types = schema.type_count(),
        "loaded schema"
    );

    Ok(schema)
}

/// Binding generator driven by CLI configuration.
pub struct SchemaGenerator {
    config: Config,
}

impl SchemaGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the configured schema and render the binding.
    pub fn generate(&self) -> CliResult<GeneratedBinding> {
        let schema = load_schema(&self.config.input.schema)?;
        self.generate_from(&schema)
    }

    /// Render the binding for an already loaded schema.
    pub fn generate_from(&self, schema: &Schema) -> CliResult<GeneratedBinding> {
        let generator = BindingGenerator::new(self.config.generator_config()?);

        let input = self.config.input.schema.display().to_string();
        let output = self.config.output.path.display().to_string();
        let content = generator.generate(&GenerateOptions::new(schema, &input, &output));

        Ok(GeneratedBinding {
            content,
            output_path: self.config.output.path.clone(),
            type_count: schema.type_count(),
        })
    }
}
