use anyhow::{Context, Result};
use clap::Parser;
use staffquote_core::{
    gate::{self, JsonFileSink, LeadRecord, SubmissionOutcome},
    logger::QuoteLogger,
    quote::builder::QuoteRequest,
};
use std::fs;
use std::path::Path;

mod config;
mod plotting;
mod report;

#[derive(Parser, Debug)]
#[command(
    name = "staffquote",
    about = "Instant staffing quote: US vs Latin America compensation benchmarks"
)]
struct Cli {
    /// Path to the YAML quote request.
    #[arg(long, default_value = "staffquote-app/request.yaml")]
    request: String,

    /// Directory of YAML catalog overlay files (benchmarks and fee models).
    #[arg(long)]
    catalog: Option<String>,

    /// Overrides the seat count from the request file. Non-numeric input
    /// falls back to one seat.
    #[arg(long)]
    seats: Option<String>,

    /// Base directory for run artifacts.
    #[arg(long, default_value = "./data/runs")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Staffquote Application ---");

    let request_str = fs::read_to_string(&cli.request)
        .with_context(|| format!("Failed to read request file '{}'", cli.request))?;
    let request: config::RequestFile =
        serde_yaml::from_str(&request_str).context("Failed to parse request file")?;

    let catalog = config::load_catalog(cli.catalog.as_deref())?;

    let mut builder = QuoteRequest::new()
        .with_custom_role(request.custom_role.clone())
        .with_seats(request.seats)
        .with_model(request.model);
    if let Some(role) = &request.role {
        builder = builder.with_selected_role(role.as_str());
    }
    if let Some(text) = &cli.seats {
        builder = builder.with_seats_text(text);
    }
    let quote = builder.build(&catalog)?;

    let output_dir = format!(
        "{}/quote_{}",
        cli.output,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Copy the request file to the output directory for traceability
    fs::copy(&cli.request, Path::new(&output_dir).join("request.yaml"))?;

    report::print_summary(&quote, catalog.model(quote.model));

    let quote_yaml = serde_yaml::to_string(&quote)?;
    fs::write(Path::new(&output_dir).join("quote.yaml"), quote_yaml)?;

    let log_path = Path::new(&output_dir).join("quotes.csv");
    let mut logger = QuoteLogger::new(log_path.to_str().unwrap())?;
    logger.log_quote(&quote)?;

    let table = report::comparison_table(&catalog);
    fs::write(Path::new(&output_dir).join("benchmark_comparison.md"), table)?;

    plotting::generate_all_plots(&output_dir, &quote, &catalog)?;

    // Submission gate: an incomplete lead form shows the quote but captures
    // no lead.
    let record = LeadRecord::new(&request.lead, &quote);
    let mut sink = JsonFileSink::new(&output_dir);
    match gate::submit(&request.lead, &record, &mut sink)? {
        SubmissionOutcome::Accepted => {
            println!("\nLead captured. Artifacts are in '{}'", output_dir);
        }
        SubmissionOutcome::Rejected => {
            println!(
                "\nLead form incomplete (email, company, and consent required); no lead captured."
            );
            println!("Artifacts are in '{}'", output_dir);
        }
    }

    Ok(())
}
