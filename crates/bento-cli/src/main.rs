//! Bento CLI - Command-line interface for the Bento programming language.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod diagnostic;

use config::CliConfig;

/// Bento - a small experimental programming language
#[derive(Parser)]
#[command(name = "bento")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display the license and exit
    #[arg(short, long)]
    license: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Bento file and print its tokens
    Run {
        /// Input file (must end in `.bento`)
        file: PathBuf,
    },

    /// Show information about the Bento installation
    Info,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    // Set up logging
    let filter = match &config.log_filter {
        Some(filter) => filter.as_str(),
        None if cli.verbose => "debug",
        None => "warn",
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    if cli.license {
        return commands::license::run(&config);
    }

    match cli.command {
        Some(Commands::Run { file }) => commands::run::run(&file),
        Some(Commands::Info) => commands::info::run(&config),
        None => {
            let epilogue = format!("Visit {} to get more information about Bento", config.website);
            Cli::command()
                .after_help(epilogue)
                .print_help()
                .map_err(|e| miette::miette!("Failed to print help: {}", e))
        }
    }
}
