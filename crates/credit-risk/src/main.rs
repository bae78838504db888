//! CLI entry point printing the Basel II summary and the reference list.

use anyhow::Result;
use clap::Parser;
use credit_risk::{Framework, ReferenceCatalog};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Credit-risk reading list",
    long_about = "Prints a summary of the Basel II Capital Accord followed by \
                  key references for understanding credit risk."
)]
struct Args {
    /// Print the summary and references as a single JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let catalog = ReferenceCatalog::new();

    if args.json {
        let report = json!({
            "framework": Framework::BaselII.display_name(),
            "summary": catalog.summarize(Framework::BaselII),
            "references": catalog.list_references(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Summary of Basel II Capital Accord:");
    println!("{}", catalog.summarize_basel_ii());

    println!("\nKey References for Understanding Credit Risk:");
    for entry in catalog.list_references() {
        println!("{}: {}", entry.name, entry.url);
    }

    Ok(())
}
