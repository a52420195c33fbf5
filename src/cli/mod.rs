//! CLI module for Scribe
//!
//! Provides command-line access to batch generation and settings. Running
//! without a subcommand launches the desktop app.

mod commands;
mod output;
mod shell;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, print_error};

/// Scribe - social post composer
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of posts
    Generate(commands::generate::GenerateArgs),

    /// List template, platform and tone ids
    Presets,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Interactive shell
    Shell,
}

/// Run the CLI with parsed arguments
pub async fn run(command: Commands, options: &OutputOptions) -> anyhow::Result<()> {
    let format = options.format();
    let quiet = options.quiet;

    match command {
        Commands::Generate(args) => commands::generate::run(args, format, quiet).await,
        Commands::Presets => commands::presets::run(format).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Shell => shell::run().await,
    }
}
