//! Kith CLI - Command-line interface for Kith
//!
//! This is the main entry point for users interacting with Kith.
//! Without a subcommand it starts the interactive prompt; every prompt
//! command also exists as a one-shot subcommand.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "kith")]
#[command(author = "Kith Contributors")]
#[command(version)]
#[command(about = "Family and friendship graph queries", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Relationship file to load
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config file (defaults to .kith/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Kith in the current directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Start the interactive prompt (the default)
    Repl {
        /// Relationship file to read before the first prompt
        path: Option<PathBuf>,
    },

    /// Show a person and their relationships
    Show {
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List a person's friends
    Friends {
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print everyone in the graph
    Dump {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List people with no recorded parent
    Orphans {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the shortest chain of relationships between two people
    Bingo {
        from: String,
        to: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List descendants by generation
    Descendants {
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List nth cousins k times removed
    Cousins {
        name: String,

        /// Cousin degree (0 for siblings)
        degree: usize,

        /// Generations removed
        #[arg(default_value = "0")]
        removed: usize,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics
    Stats {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load(cli.config.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }

    let file = commands::resolve_file(cli.file, &config);
    let file = file.as_deref();

    match cli.command.unwrap_or(Commands::Repl { path: None }) {
        Commands::Init { path } => commands::init(&path),
        Commands::Repl { path } => commands::repl(path.as_deref().or(file), &config),
        Commands::Show { name, json } => commands::show(file, &name, json),
        Commands::Friends { name, json } => commands::friends(file, &name, json),
        Commands::Dump { json } => commands::dump(file, json),
        Commands::Orphans { json } => commands::orphans(file, json),
        Commands::Bingo { from, to, json } => commands::bingo(file, &from, &to, json),
        Commands::Descendants { name, json } => commands::descendants(file, &name, json),
        Commands::Cousins {
            name,
            degree,
            removed,
            json,
        } => commands::cousins(file, &name, degree, removed, json),
        Commands::Stats { json } => commands::stats(file, json),
    }
}
