//! Integration tests for graphql-bindgen-cli.
//!
//! These tests verify end-to-end functionality of the CLI tool,
//! including configuration, schema loading, generation and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use graphql_bindgen::print_schema;
use graphql_bindgen_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::{CliError, ConfigError},
    generator::{load_schema, SchemaGenerator},
    writer::{FileWriter, WriteResult},
};

/// Get the path to the fixture schema.
fn fixture_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schema.json")
}

/// Config reading the fixture and writing into `dir`.
fn fixture_config(dir: &Path) -> Config {
    ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            input: Some(fixture_schema()),
            output: Some(dir.join("generated/binding.ts")),
        },
    )
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_graphql-bindgen"))
}

// =============================================================================
// Config Integration Tests
// =============================================================================

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphql-bindgen.toml");
    fs::write(
        &path,
        r#"
[input]
schema = "api/schema.json"

[generator]
declaration_order = "name"

[scalars]
DateTime = "string"
"#,
    )
    .unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();
    assert_eq!(config.input.schema, PathBuf::from("api/schema.json"));
    assert_eq!(config.output.path, PathBuf::from("./generated/binding.ts"));
    assert_eq!(config.generator.declaration_order, "name");
    assert_eq!(config.scalars.len(), 1);
}

#[test]
fn test_missing_explicit_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    let err = ConfigManager::load(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::NotFound { path: ref missing }) if *missing == path
    ));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphql-bindgen.toml");
    fs::write(&path, "[generator\ngenerate_docs = true").unwrap();

    let err = ConfigManager::load(Some(&path)).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

// =============================================================================
// Generation Integration Tests
// =============================================================================

#[test]
fn test_generate_from_fixture() {
    let dir = TempDir::new().unwrap();
    let binding = SchemaGenerator::new(fixture_config(dir.path()))
        .generate()
        .unwrap();

    let content = &binding.content;
    assert!(content.contains("    users: (args, info, context) => Promise<User[]>\n"));
    assert!(content.contains("    user: (args, info, context) => Promise<User | null>\n"));
    assert!(content.contains("    createUser: (args, info, context) => Promise<User>\n"));
    assert!(content.contains("  subscription: {}\n"));
    assert!(content.contains("  createdAt?: DateTime\n"));
    assert!(content.contains("export type DateTime = Date | string"));
    assert!(content.contains("export type UserInput = {\n  name: string\n  role?: Role\n}"));
    assert!(!content.contains("__Schema"));
}

#[test]
fn test_generate_with_scalar_override() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(dir.path());
    config
        .scalars
        .insert("DateTime".to_string(), "string".to_string());

    let binding = SchemaGenerator::new(config).generate().unwrap();
    assert!(binding.content.contains("export type DateTime = string\n"));
}

#[test]
fn test_print_fixture_schema() {
    let schema = load_schema(&fixture_schema()).unwrap();
    let sdl = print_schema(&schema);

    assert!(sdl.starts_with("type Query {\n"));
    assert!(sdl.contains("  users(first: Int = 10): [User!]!\n"));
    assert!(sdl.contains("input UserInput {\n  name: String!\n  role: Role = USER\n}"));
    assert!(sdl.contains("scalar DateTime"));
    assert!(!sdl.contains("scalar String"));
    assert!(!sdl.contains("schema {"));
}

// =============================================================================
// Writer Integration Tests
// =============================================================================

#[test]
fn test_end_to_end_generation() {
    let dir = TempDir::new().unwrap();
    let binding = SchemaGenerator::new(fixture_config(dir.path()))
        .generate()
        .unwrap();

    let writer = FileWriter::new(false);
    let result = writer.write(&binding.output_path, &binding.content).unwrap();
    assert!(result.was_written());
    assert_eq!(
        fs::read_to_string(dir.path().join("generated/binding.ts")).unwrap(),
        binding.content
    );

    let again = writer.write(&binding.output_path, &binding.content).unwrap();
    assert!(matches!(again, WriteResult::Unchanged { .. }));
}

#[test]
fn test_dry_run_leaves_disk_untouched() {
    let dir = TempDir::new().unwrap();
    let binding = SchemaGenerator::new(fixture_config(dir.path()))
        .generate()
        .unwrap();

    let result = FileWriter::new(true)
        .write(&binding.output_path, &binding.content)
        .unwrap();
    assert!(!result.was_written());
    assert!(!dir.path().join("generated").exists());
}

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_cli_generate_then_validate() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("binding.ts");

    let status = cli()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--input")
        .arg(fixture_schema())
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(output.exists());

    let status = cli()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--output")
        .arg(&output)
        .arg("--input")
        .arg(fixture_schema())
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_cli_validate_accepts_equivalent_path_spelling() {
    let dir = TempDir::new().unwrap();

    let status = cli()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--input")
        .arg(fixture_schema())
        .status()
        .unwrap();
    assert!(status.success());

    let content = fs::read_to_string(dir.path().join("generated/binding.ts")).unwrap();
    assert!(content.contains("// Binding: ./generated/binding.ts"));

    let status = cli()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--path")
        .arg("generated/binding.ts")
        .arg("--input")
        .arg(fixture_schema())
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_cli_missing_explicit_config_exits_with_1() {
    let dir = TempDir::new().unwrap();

    let status = cli()
        .current_dir(dir.path())
        .arg("print-schema")
        .arg("--input")
        .arg(fixture_schema())
        .arg("--config")
        .arg("custom.toml")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_without_default_config_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let output = cli()
        .current_dir(dir.path())
        .arg("print-schema")
        .arg("--input")
        .arg(fixture_schema())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("type Query {\n"));
}

#[test]
fn test_cli_validate_stale_binding_exits_with_2() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("binding.ts");
    fs::write(&output, "export type Stale = string\n").unwrap();

    let status = cli()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--path")
        .arg(&output)
        .arg("--input")
        .arg(fixture_schema())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(2));
}

#[test]
fn test_cli_init_writes_default_config() {
    let dir = TempDir::new().unwrap();

    let status = cli().current_dir(dir.path()).arg("init").status().unwrap();
    assert!(status.success());

    let content = fs::read_to_string(dir.path().join("graphql-bindgen.toml")).unwrap();
    assert_eq!(content, ConfigManager::default_config_content());

    let status = cli().current_dir(dir.path()).arg("init").status().unwrap();
    assert_eq!(status.code(), Some(2));
}

#[test]
fn test_cli_missing_schema_exits_with_1() {
    let dir = TempDir::new().unwrap();

    let status = cli()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--input")
        .arg(dir.path().join("missing.json"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}
