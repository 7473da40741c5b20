//! Render command
//!
//! Usage: snipforge render "<TEMPLATE>" [--file <FILE>] [--max-depth <N>]

use std::path::{Path, PathBuf};

use clap::Args;
use snipforge_core::template::{render, validate};
use snipforge_core::DEFAULT_MAX_DEPTH;
use snipforge_store::StoreHandle;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template text (omit when using --file)
    pub template: Option<String>,

    /// Read the template from a file instead
    #[arg(short, long, conflicts_with = "template")]
    pub file: Option<PathBuf>,

    /// Recursion ceiling for nested references
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(db: &Path, args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_template(args.template, args.file.as_deref())?;

    let validation = validate(&template);
    if !validation.valid {
        for error in &validation.errors {
            eprintln!("✗ {}", error);
        }
        return Err("template is not valid".into());
    }

    let store = StoreHandle::open(db)?;
    let outcome = render(&template, &store, args.max_depth);

    for warning in &outcome.errors {
        eprintln!("⚠ {}", warning);
    }

    // Same policy as the HTTP layer: errors with nothing expanded is failure
    if !outcome.errors.is_empty() && outcome.rendered == template {
        return Err("failed to render template".into());
    }

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, outcome.rendered)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", outcome.rendered);
    }

    Ok(())
}

fn read_template(
    template: Option<String>,
    file: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (template, file) {
        (Some(template), _) => Ok(template),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err("provide a template argument or --file".into()),
    }
}
