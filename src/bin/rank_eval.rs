//! rank-eval - dataset agreement CLI
//!
//! Compares a ground-truth dataset file against one or more candidate files
//! and prints every applicable agreement coefficient.

use clap::Parser;
use rank_eval::compare::evaluate;
use rank_eval::data::Dataset;
use rank_eval::error::Result;
use std::path::{Path, PathBuf};

/// Evaluate candidate datasets against a ground truth
#[derive(Parser)]
#[command(name = "rank-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ground-truth dataset file
    truth: PathBuf,

    /// Paths to candidate dataset files
    #[arg(required = true)]
    candidates: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run(cli: &Cli) -> Result<()> {
    let truth = Dataset::from_path(&cli.truth)?;

    let mut candidates = Vec::with_capacity(cli.candidates.len());
    for path in &cli.candidates {
        let dataset = Dataset::from_path(path)?;
        candidates.push((file_name(path), dataset));
    }

    let report = evaluate(&file_name(&cli.truth), &truth, &candidates)?;

    match cli.format.as_str() {
        "json" => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            }
        },
        _ => print!("{}", report),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
