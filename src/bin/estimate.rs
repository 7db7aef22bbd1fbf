//! CLI driver for the estimation engine
//!
//! Reads a wizard submission as JSON (file argument or stdin) and prints
//! the generated requirements summary as JSON or markdown.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use roadmapper::estimator::{generate_summary, validate_request, RawEstimateRequest};

#[derive(Parser)]
#[command(
    name = "estimate",
    about = "Generate a project estimate from a wizard submission",
    version
)]
struct Cli {
    /// Path to the request JSON; reads stdin when omitted
    input: Option<PathBuf>,

    /// Render the summary as markdown instead of JSON
    #[arg(long)]
    markdown: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let payload = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let raw: RawEstimateRequest =
        serde_json::from_str(&payload).context("Request is not valid JSON")?;
    let request = validate_request(&raw)?;
    let summary = generate_summary(&request);

    if cli.markdown {
        print!("{}", summary.to_markdown());
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
