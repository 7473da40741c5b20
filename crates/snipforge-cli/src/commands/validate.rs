//! Validate command
//!
//! Usage: snipforge validate "<TEMPLATE>" [--file <FILE>]

use std::path::PathBuf;

use clap::Args;
use snipforge_core::template::{extract_references, validate};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Template text (omit when using --file)
    pub template: Option<String>,

    /// Read the template from a file instead
    #[arg(short, long, conflicts_with = "template")]
    pub file: Option<PathBuf>,
}

/// Execute validate command
pub fn execute(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let template = match (args.template, args.file) {
        (Some(template), _) => template,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("provide a template argument or --file".into()),
    };

    let report = validate(&template);

    if !report.valid {
        for error in &report.errors {
            eprintln!("✗ {}", error);
        }
        return Err("template is not valid".into());
    }

    let references = extract_references(&template);
    println!("✓ Template is valid ({} references)", references.len());
    for reference in references {
        println!("  {}", reference);
    }

    Ok(())
}
