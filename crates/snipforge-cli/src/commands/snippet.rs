//! Snippet command
//!
//! Usage: snipforge snippet <add|list|show|rm> ...

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use snipforge_core::hierarchy::hierarchy_display;
use snipforge_core::Snippet;
use snipforge_store::repo::SnippetRepo;
use snipforge_store::StoreHandle;

#[derive(Debug, Args)]
pub struct SnippetArgs {
    #[command(subcommand)]
    pub command: SnippetCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnippetCommand {
    /// Add a new snippet
    Add(AddArgs),
    /// List snippets, optionally filtered by name substring
    List(ListArgs),
    /// Show one snippet
    Show(ShowArgs),
    /// Remove a snippet
    Rm(RmArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Hierarchical snippet name, e.g. geo_asia_japan
    pub name: String,

    /// Content text (omit when using --file)
    pub content: Option<String>,

    /// Read content from a file instead
    #[arg(short, long, conflicts_with = "content")]
    pub file: Option<PathBuf>,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name substring filter
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Snippet name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Snippet name
    pub name: String,
}

/// Execute snippet command
pub fn execute(db: &Path, args: SnippetArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SnippetCommand::Add(add) => execute_add(db, add),
        SnippetCommand::List(list) => execute_list(db, list),
        SnippetCommand::Show(show) => execute_show(db, show),
        SnippetCommand::Rm(rm) => execute_rm(db, rm),
    }
}

fn execute_add(db: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("provide content or --file".into()),
    };

    let snippet = Snippet::new(args.name, content, args.description)?;

    let store = StoreHandle::open(db)?;
    let conn = store.conn()?;
    SnippetRepo::create(&conn, &snippet)?;

    println!("✓ Added {}", snippet.name);
    Ok(())
}

fn execute_list(db: &Path, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreHandle::open(db)?;
    let conn = store.conn()?;
    let snippets = SnippetRepo::list(&conn, args.search.as_deref())?;

    if snippets.is_empty() {
        println!("No snippets found");
        return Ok(());
    }

    for snippet in snippets {
        match &snippet.description {
            Some(description) => println!("{}  -  {}", snippet.name, description),
            None => println!("{}", snippet.name),
        }
    }

    Ok(())
}

fn execute_show(db: &Path, args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreHandle::open(db)?;
    let conn = store.conn()?;
    let snippet = SnippetRepo::get(&conn, &args.name)?
        .ok_or_else(|| format!("snippet not found: {}", args.name))?;

    println!("{}", hierarchy_display(&snippet.name));
    if let Some(description) = &snippet.description {
        println!("({})", description);
    }
    println!();
    println!("{}", snippet.content);

    Ok(())
}

fn execute_rm(db: &Path, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreHandle::open(db)?;
    let conn = store.conn()?;

    if SnippetRepo::delete(&conn, &args.name)? {
        println!("✓ Removed {}", args.name);
    } else {
        println!("Nothing to remove: {} does not exist", args.name);
    }

    Ok(())
}
