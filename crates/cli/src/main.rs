mod cmd;
mod output;
mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// nonstop - package configuration control
#[derive(Parser)]
#[command(name = "nonstop")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the host platform and the default package filter
  Info,

  /// Apply package operations to the default configuration and show the result
  Configure {
    /// JSON file with the operation list, or '-' for stdin
    operations: String,
  },

  /// Apply environment operations and show what changed
  Env {
    /// JSON file with the operation list, or '-' for stdin
    operations: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Info => cmd::cmd_info(cli.output),
    Commands::Configure { operations } => cmd::cmd_configure(&operations, cli.output, cli.verbose),
    Commands::Env { operations } => cmd::cmd_env(&operations, cli.output),
  }
}
