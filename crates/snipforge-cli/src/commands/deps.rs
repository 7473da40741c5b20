//! Deps command
//!
//! Usage: snipforge deps <NAME>

use std::path::Path;

use clap::Args;
use snipforge_core::template::compute_dependencies;
use snipforge_store::StoreHandle;

#[derive(Debug, Args)]
pub struct DepsArgs {
    /// Snippet name to inspect
    pub name: String,
}

/// Execute deps command
pub fn execute(db: &Path, args: DepsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreHandle::open(db)?;
    let report = compute_dependencies(&args.name, &store);

    if report.dependencies.is_empty() {
        println!("{} has no dependencies", args.name);
    } else {
        for dependency in &report.dependencies {
            println!("{}", dependency);
        }
    }

    for error in &report.errors {
        eprintln!("⚠ {}", error);
    }

    Ok(())
}
