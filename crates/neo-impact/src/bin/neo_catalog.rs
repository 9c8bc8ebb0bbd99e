//! Catalog builder binary
//!
//! Run with: cargo run -p neo-impact --features cli --bin neo-catalog

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use neo_impact::{
    catalog::{CatalogQueryService, CatalogStore, NeoCatalogBuilder},
    config::ImpactConfig,
    providers::NeoWsClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the NEO catalog file from NASA NeoWs
#[derive(Parser, Debug)]
#[command(name = "neo-catalog", version, about)]
struct Args {
    /// Output file (defaults to the configured catalog path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the live source and write the sample catalog
    #[arg(long)]
    fallback_only: bool,

    /// Number of NeoWs pages to fetch
    #[arg(long)]
    pages: Option<u32>,

    /// Objects per NeoWs page
    #[arg(long)]
    page_size: Option<u32>,

    /// Number of largest-impact objects to print
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neo_impact=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = ImpactConfig::load()?;
    if let Some(pages) = args.pages {
        config.neo_source.pages = pages;
    }
    if let Some(size) = args.page_size {
        config.neo_source.page_size = size;
    }
    let output = args.output.unwrap_or_else(|| config.catalog.path.clone());

    let builder = NeoCatalogBuilder::new(&config.catalog);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(120));

    let document = if args.fallback_only {
        spinner.set_message("Building sample catalog...");
        builder.build_fallback()
    } else {
        spinner.set_message(format!("Fetching NEOs from {}...", config.neo_source.base_url));
        let source = NeoWsClient::new(&config.neo_source)?;
        builder.build_from_source(&source).await
    };

    spinner.set_message(format!("Writing {}...", output.display()));
    CatalogStore::new(&output).save(&document)?;
    spinner.finish_and_clear();

    let meta = &document.metadata;
    println!("{} {}", style("✓").green().bold(), style("Catalog written").bold());
    println!("  File:        {}", output.display());
    println!("  Source:      {}", meta.source);
    println!("  Total NEOs:  {}", meta.count);
    println!(
        "  Hazardous:   {}",
        style(meta.hazardous_count).red().bold()
    );

    let service = CatalogQueryService::new(&document);
    let top = service.top_n_by_impact(args.top);
    if !top.is_empty() {
        println!("\n{}", style("Largest impact energies").bold().underlined());
        for (rank, neo) in top.iter().enumerate() {
            println!(
                "  {:>2}. {:<24} {:>14.1} Mt  {}",
                rank + 1,
                neo.name,
                neo.impact_stats.energy_megatons,
                style(neo.impact_stats.scale_category).yellow()
            );
        }
    }

    Ok(())
}
