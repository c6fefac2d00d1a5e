//! # graphql-bindgen-cli
//!
//! CLI library for generating TypeScript GraphQL bindings from introspection
//! results.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`generator`] - Schema loading and binding generation
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - Schema file watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod watcher;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{load_schema, SchemaGenerator};
pub use watcher::FileWatcher;
pub use writer::FileWriter;
