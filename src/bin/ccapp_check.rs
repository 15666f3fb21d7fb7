//! Completeness check for a saved application form
//!
//! Reads a form snapshot from JSON and prints the missing-field summary
//! and, optionally, the document-gate status.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccapp::documents;
use ccapp::form::FormState;
use ccapp::validation::{format_missing_fields, validate_required_fields};

#[derive(Parser)]
#[command(name = "ccapp_check", about = "Validate a saved credit card application form")]
struct Args {
    /// Path to a form snapshot (flat JSON object of field values)
    form: PathBuf,

    /// Also report the document-gate status
    #[arg(long)]
    documents: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let payload = std::fs::read_to_string(&args.form)
        .with_context(|| format!("failed to read {}", args.form.display()))?;
    let form: FormState = serde_json::from_str(&payload)
        .with_context(|| format!("failed to parse {}", args.form.display()))?;

    let report = validate_required_fields(&form);
    println!("{}", format_missing_fields(&report));

    if args.documents {
        println!();
        if documents::is_complete(&form) {
            println!("Documents: complete, ready to submit");
        } else {
            println!("Documents missing:");
            for requirement in documents::missing_documents(&form) {
                println!("  - {}", requirement.label);
            }
        }
    }

    Ok(())
}
