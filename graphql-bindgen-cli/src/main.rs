//! # graphql-bindgen
//!
//! CLI tool for generating TypeScript GraphQL bindings from introspection
//! results.
//!
//! ## Usage
//!
//! ```bash
//! # Generate the binding configured in graphql-bindgen.toml
//! graphql-bindgen generate
//!
//! # Generate from a specific schema to a specific file
//! graphql-bindgen generate --input api/schema.json --output src/binding.ts
//!
//! # Watch mode for development
//! graphql-bindgen generate --watch
//!
//! # Dry run to preview the binding
//! graphql-bindgen generate --dry-run
//!
//! # Initialize configuration
//! graphql-bindgen init
//!
//! # Validate the binding is up-to-date
//! graphql-bindgen validate --path ./generated/binding.ts
//!
//! # Print the schema as SDL
//! graphql-bindgen print-schema --input api/schema.json
//! ```

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use graphql_bindgen::print_schema;
use graphql_bindgen_cli::{
    config::{CliArgs, Config, ConfigManager, CONFIG_FILENAME},
    error::CliError,
    generator::{load_schema, SchemaGenerator},
    watcher::{FileWatcher, WatchEvent},
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "graphql-bindgen")]
#[command(author, version, about = "Generate TypeScript bindings from a GraphQL schema", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the TypeScript binding from an introspection result
    Generate {
        /// Introspection result (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Binding file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Watch the schema file and regenerate
        #[arg(short, long)]
        watch: bool,

        /// Preview the binding without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize a new graphql-bindgen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that a generated binding is up-to-date
    Validate {
        /// Binding file to compare (defaults to the configured output path)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Introspection result (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path the binding was generated for
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the schema as SDL
    PrintSchema {
        /// Introspection result (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,graphql_bindgen=info,graphql_bindgen_cli=info".to_string(),
            _ => "info,graphql_bindgen=debug,graphql_bindgen_cli=debug".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            watch,
            dry_run,
        } => cmd_generate(input, output, config, watch, dry_run),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate {
            path,
            input,
            output,
            config,
        } => cmd_validate(path, input, output, config),

        Commands::PrintSchema { input, config } => cmd_print_schema(input, config),
    }
}

fn load_config(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<Config, CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    Ok(ConfigManager::merge_cli_args(
        config,
        &CliArgs { input, output },
    ))
}

/// Generate command implementation.
fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    watch: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path, input, output)?;

    if watch {
        run_watch_mode(&config, dry_run)
    } else {
        run_generate(&config, dry_run)
    }
}

/// Run binding generation once.
fn run_generate(config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!(
        "{} {}",
        "Reading schema".cyan(),
        config.input.schema.display()
    );

    let binding = SchemaGenerator::new(config.clone()).generate()?;

    println!(
        "  Rendered {} type(s)",
        binding.type_count.to_string().green()
    );

    let writer = FileWriter::new(dry_run);

    match writer.write(&binding.output_path, &binding.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Press Ctrl+C to stop\n");

    if let Err(e) = run_generate(config, dry_run) {
        println!("{} {}", "Generation error:".red(), e);
    }

    let watcher = FileWatcher::new(&config.input.schema);
    let (_debouncer, rx) = watcher.watch()?;

    println!(
        "\n{} {}",
        "Watching for changes to".cyan(),
        watcher.schema().display()
    );

    while let Ok(event) = rx.recv() {
        match event {
            WatchEvent::Error(message) => {
                println!("{} {}", "Watch error:".red(), message);
                continue;
            }
            WatchEvent::Deleted(path) => {
                println!("\n{} {}", "Schema removed:".yellow(), path.display());
                continue;
            }
            WatchEvent::Modified(path) => {
                println!("\n{} {}", "Schema changed:".cyan(), path.display());
            }
        }

        if let Err(e) = run_generate(config, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!(
            "\n{} {}",
            "Watching for changes to".cyan(),
            watcher.schema().display()
        );
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
///
/// The binding is rendered for the configured output path, so the header
/// matches what `generate` wrote regardless of how `--path` is spelled.
fn cmd_validate(
    path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    println!("{}", "Validating binding...".cyan());

    let config = load_config(config_path, input, output)?;
    let binding_path = path.unwrap_or_else(|| config.output.path.clone());

    if !binding_path.exists() {
        return Err(CliError::Validation(format!(
            "Binding file not found: {}",
            binding_path.display()
        )));
    }

    let existing_content = std::fs::read_to_string(&binding_path)?;
    let binding = SchemaGenerator::new(config).generate()?;

    if existing_content.trim() == binding.content.trim() {
        println!("{} Binding is up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} Binding is out of date", "✗".red());
        println!("  Run 'graphql-bindgen generate' to update");
        Err(CliError::Validation("Binding is out of date".to_string()))
    }
}

/// Print-schema command implementation.
fn cmd_print_schema(input: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = load_config(config_path, input, None)?;
    let schema = load_schema(&config.input.schema)?;
    print!("{}", print_schema(&schema));
    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
