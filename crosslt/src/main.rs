//! Crosslt CLI - lex and check shader sources.
//!
//! This is the main entry point for the crosslt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{CrossltError, Result};

/// Crosslt - lex and check shader sources
///
/// Crosslt dumps the token stream of HLSL-family shader files and checks
/// that whole source trees lex without errors.
#[derive(Parser, Debug)]
#[command(name = "crosslt")]
#[command(author = "Crossl Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex and check shader sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CROSSLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CROSSLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CROSSLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the crosslt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of shader sources
    ///
    /// Prints one token per line as `line:column KIND lexeme`, or one JSON
    /// array of tokens per file with `--format json`.
    Tokens(TokensCommand),

    /// Check that shader sources lex cleanly
    ///
    /// Lexes all files in parallel, prints each file's token count and a
    /// diagnostic for every file that fails.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Shader dialect (default: from config)
    #[arg(short, long, env = "CROSSLT_DIALECT")]
    dialect: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Shader dialect (default: from config)
    #[arg(short, long, env = "CROSSLT_DIALECT")]
    dialect: Option<String>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Main entry point for the crosslt CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine-readable.
/// `RUST_LOG` takes precedence over the `info`/`debug` default.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CrossltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                files: args.files,
                format: args.format,
                dialect: args.dialect,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                files: args.files,
                dialect: args.dialect,
                jobs: args.jobs,
            },
            config,
        ),
    }
}
