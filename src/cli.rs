//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use trivia::output::OutputMode;

/// trivia - A trivia question bank over HTTP
#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    version,
    about = "A trivia question bank over HTTP",
    long_about = "Serve a trivia question bank as a JSON API.\n\n\
                  Categories and questions are preloaded from a TOML seed file;\n\
                  questions can then be listed, searched, created, deleted and\n\
                  drawn at random for quizzes."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Config file (defaults to the per-user config if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,

        /// TOML file with categories and questions to preload
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Load a seed file and report what it contains
    CheckSeed {
        /// Path to the seed file
        file: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve {
            config,
            host,
            port,
            workers,
            seed,
        }) => commands::serve(&commands::ServeArgs {
            config,
            host,
            port,
            workers,
            seed,
        }),
        Some(Command::CheckSeed { file }) => commands::check_seed(&file, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("trivia v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("trivia v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'trivia --help' for usage");
                println!("Run 'trivia serve --seed data/seed.toml' to get started");
            }
            Ok(())
        },
    }
}
