//! Snipforge CLI
//!
//! Command-line interface for Snipforge

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "snipforge")]
#[command(about = "Snipforge - hierarchical prompt snippet manager", long_about = None)]
struct Cli {
    /// Database path
    #[arg(long, global = true, default_value = ".snipforge/store.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Render a template against the stored snippets
    Render(commands::render::RenderArgs),
    /// Validate template syntax
    Validate(commands::validate::ValidateArgs),
    /// Snippet operations (add, list, show, rm)
    Snippet(commands::snippet::SnippetArgs),
    /// Rank stored snippets by similarity to a name
    Similar(commands::similar::SimilarArgs),
    /// Inspect a snippet's dependency graph
    Deps(commands::deps::DepsArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    snipforge_core::logging::init(snipforge_core::logging::Profile::Development);

    let Cli { db, command } = Cli::parse();

    let result = match command {
        Commands::Serve(args) => commands::serve::execute(&db, args),
        Commands::Render(args) => commands::render::execute(&db, args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Snippet(args) => commands::snippet::execute(&db, args),
        Commands::Similar(args) => commands::similar::execute(&db, args),
        Commands::Deps(args) => commands::deps::execute(&db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
