//! ddlgen CLI - Main entry point

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ddlgen_cli::commands::generate::GenerateOptions;
use ddlgen_cli::config::{CONFIG_FILE, Config, ConfigError};
use ddlgen_cli::error::CliError;
use ddlgen_generator::Registry;
use ddlgen_types::Dialect;

/// ddlgen - Dialect-aware DDL generation
#[derive(Parser, Debug)]
#[command(name = "ddlgen")]
#[command(author, version, about = "Generate DDL for entity schemas", long_about = None)]
struct Cli {
    /// Path to config file (default: ddlgen.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log generator events to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new ddlgen.toml configuration file
    Init {
        /// Database dialect (mysql, postgresql, oracle, sqlserver, sqlite, h2, dm, kingbase)
        #[arg(short, long, default_value = "mysql", value_parser = parse_dialect)]
        dialect: Dialect,
    },

    /// Generate DDL for every entity in the schema
    Generate {
        /// Override dialect from config
        #[arg(short, long, value_parser = parse_dialect)]
        dialect: Option<Dialect>,

        /// Override schema documents from config (repeatable, globs allowed)
        #[arg(short, long, value_name = "PATH")]
        schema: Vec<String>,

        /// Write SQL to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Emit referenced tables first
        #[arg(long)]
        order_by_dependencies: bool,
    },

    /// Validate configuration and lint the schema
    Check {
        /// Override dialect from config
        #[arg(short, long, value_parser = parse_dialect)]
        dialect: Option<Dialect>,
    },

    /// List supported dialects
    Dialects,
}

/// Parse dialect argument
fn parse_dialect(s: &str) -> Result<Dialect, String> {
    Dialect::parse(s).ok_or_else(|| {
        format!(
            "unknown dialect '{s}', expected one of: {}",
            Dialect::ALL.map(|d| d.as_str()).join(", ")
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` (or `verbose = true` in the config) raises
/// the level from `warn`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = Registry::builtin();

    match cli.command {
        Command::Init { dialect } => {
            init_tracing(cli.verbose);
            let path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            ddlgen_cli::commands::init::run(&path, dialect)
        }
        Command::Generate {
            dialect,
            schema,
            out,
            order_by_dependencies,
        } => {
            // Flags alone are enough when no config file exists
            let config = match load_config(cli.config.as_deref()) {
                Ok(config) => Some(config),
                Err(CliError::Config(ConfigError::NotFound(_)))
                    if cli.config.is_none() && !schema.is_empty() =>
                {
                    None
                }
                Err(e) => return Err(e),
            };
            init_tracing(verbosity(cli.verbose, config.as_ref()));

            ddlgen_cli::commands::generate::run(
                config.as_ref(),
                &registry,
                GenerateOptions {
                    dialect,
                    schema,
                    out,
                    order_by_dependencies,
                },
            )
        }
        Command::Check { dialect } => {
            let config = load_config(cli.config.as_deref())?;
            init_tracing(verbosity(cli.verbose, Some(&config)));
            ddlgen_cli::commands::check::run(&config, &registry, dialect)
        }
        Command::Dialects => {
            init_tracing(cli.verbose);
            ddlgen_cli::commands::dialects::run(&registry)
        }
    }
}

fn verbosity(flag: u8, config: Option<&Config>) -> u8 {
    match config {
        Some(config) if config.verbose => flag.max(1),
        _ => flag,
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
