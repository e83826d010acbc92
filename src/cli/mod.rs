//! CLI adapter for Kotoba
//!
//! Provides a command-line interface to the dictionary search.
//! This module is parallel to `http/`: both depend on `core/` but not
//! on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! |  (axum adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::services::Services;

/// Kotoba - Japanese-English dictionary lookup
///
/// Search a JMdict-style SQLite dictionary by kanji, kana or English.
/// The query's script decides which fields are searched.
#[derive(Parser, Debug)]
#[command(name = "kotoba")]
#[command(version)]
#[command(about = "Japanese-English dictionary lookup", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Dictionary database (overrides config and KOTOBA_DATABASE)
    #[arg(long, global = true, env = "KOTOBA_DATABASE")]
    pub database: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the dictionary
    Search(commands::SearchArgs),

    /// Show which script category a query falls into
    Classify(commands::ClassifyArgs),

    /// Show version and dictionary information
    Info(commands::InfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  kotoba completions bash > ~/.local/share/bash-completion/completions/kotoba
    ///   zsh:   kotoba completions zsh > ~/.zfunc/_kotoba
    ///   fish:  kotoba completions fish > ~/.config/fish/completions/kotoba.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Commands that need neither config nor the dictionary
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Classify(args) => return commands::classify::execute(args, cli.format),
        _ => {}
    }

    let mut config = Config::load()?;
    if let Some(database) = cli.database {
        config.storage.database_path = database;
    }

    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, cli.format);
    }

    let services = Services::new(config)?;

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::Info(args) => commands::info::execute(args, &services, cli.format),
        Commands::Completions(_) | Commands::Classify(_) | Commands::ShowConfig(_) => Ok(()),
    }
}
