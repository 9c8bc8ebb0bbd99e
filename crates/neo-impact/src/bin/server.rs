//! Impact server binary
//!
//! Run with: cargo run -p neo-impact --bin neo-impact-server

use neo_impact::{config::ImpactConfig, server::ImpactServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neo_impact=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                    NEO Impact Service                     ║
║        Near-Earth Object Catalog & Impact Simulator       ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    let config = ImpactConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Catalog file: {}", config.catalog.path.display());
    tracing::info!("  - NEO source: {}", config.neo_source.base_url);
    tracing::info!(
        "  - Analysis model: {} ({})",
        config.analysis.model,
        if config.analysis.is_configured() { "enabled" } else { "disabled" }
    );

    let server = ImpactServer::new(config)?;

    if !server.state().is_ready() {
        tracing::warn!("No catalog loaded; run neo-catalog or POST /api/catalog/rebuild");
    }

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  GET  /api/neos      - NEO catalog");
    println!("  POST /api/simulate  - Simulate an impact");
    println!("  POST /api/intensity - Impact intensity");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
