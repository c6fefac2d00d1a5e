//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `graphql-bindgen.toml`
//! files and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use graphql_bindgen::generator::DEFAULT_BINDING_MODULE;
use graphql_bindgen::{DeclarationOrder, GeneratorConfig};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "graphql-bindgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema input.
    pub input: InputConfig,

    /// Binding output.
    pub output: OutputConfig,

    /// Rendering options.
    pub generator: GeneratorSection,

    /// Custom scalar mappings (scalar name -> TypeScript type).
    pub scalars: IndexMap<String, String>,
}

/// Input configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Introspection result to read.
    pub schema: PathBuf,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Binding file to write.
    pub path: PathBuf,
}

/// Rendering options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Whether to emit description comments.
    pub generate_docs: bool,

    /// Whether built-in scalar leaves render as TypeScript primitives.
    pub inline_builtin_scalars: bool,

    /// `kind` or `name`.
    pub declaration_order: String,

    /// Module that provides `makeBindingClass`.
    pub binding_module: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("schema.json"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./generated/binding.ts"),
        }
    }
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            generate_docs: true,
            inline_builtin_scalars: true,
            declaration_order: "kind".to_string(),
            binding_module: DEFAULT_BINDING_MODULE.to_string(),
        }
    }
}

impl Config {
    /// Convert to the library generator configuration.
    pub fn generator_config(&self) -> CliResult<GeneratorConfig> {
        let order = match self.generator.declaration_order.as_str() {
            "kind" => DeclarationOrder::Kind,
            "name" => DeclarationOrder::Name,
            other => {
                return Err(ConfigError::invalid_value(
                    "generator.declaration_order",
                    format!("expected \"kind\" or \"name\", found \"{}\"", other),
                )
                .into())
            }
        };

        let config = self.scalars.iter().fold(
            GeneratorConfig::new()
                .with_generate_docs(self.generator.generate_docs)
                .with_inline_builtin_scalars(self.generator.inline_builtin_scalars)
                .with_declaration_order(order)
                .with_binding_module(&self.generator.binding_module),
            |config, (scalar, ts_type)| config.with_scalar_override(scalar, ts_type),
        );

        Ok(config)
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location and
    /// falls back to the default configuration when that file is absent.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref input) = args.input {
            config.input.schema = input.clone();
        }

        if let Some(ref output) = args.output {
            config.output.path = output.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# graphql-bindgen configuration file

[input]
# Introspection result (JSON) to generate the binding from
schema = "schema.json"

[output]
# TypeScript binding file to write
path = "./generated/binding.ts"

[generator]
# Whether to emit description comments for types and fields
generate_docs = true

# Render String/Int/Float/Boolean as string/number/boolean at use sites
inline_builtin_scalars = true

# Declaration order: "kind" (enums, inputs, interfaces, objects, scalars, unions) or "name"
declaration_order = "kind"

# Module that provides makeBindingClass
binding_module = "graphql-binding"

[scalars]
# Custom scalar mappings (GraphQL scalar = TypeScript type)
# JSON = "any"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Schema input override.
    pub input: Option<PathBuf>,

    /// Binding output override.
    pub output: Option<PathBuf>,
}
