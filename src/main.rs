mod config;
mod enrichment;
mod error;
mod models;
mod normalizer;
mod providers;
mod query;
mod render;
mod search;
mod server;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use enrichment::{GroqClient, TextGenerator};
use providers::ZillowClient;
use render::PageWriter;
use search::SearchService;
use std::sync::Arc;
use summary::format_dollars;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "listing-scout", about = "Natural-language property listing search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Run a single search and print the results
    Search {
        /// Free-text query, e.g. "condos near Chicago under 500k"
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_scout=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let service = build_service(&config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(service, &config).await,
        Command::Search { query } => print_search(&service, &query).await,
    }
}

fn build_service(config: &Config) -> Result<SearchService> {
    let provider = ZillowClient::new(
        config.zillow_api_key.clone(),
        config.zillow_api_host.clone(),
        config.provider_timeout,
    )?;

    let generator: Option<Arc<dyn TextGenerator>> = match &config.groq_api_key {
        Some(key) => {
            let mut client =
                GroqClient::new(key.clone(), config.groq_model.clone(), config.provider_timeout)?;
            if let Some(url) = &config.groq_base_url {
                client = client.with_base_url(url);
            }
            Some(Arc::new(client))
        }
        None => {
            warn!("GROQ_API_KEY not set, location overviews disabled");
            None
        }
    };

    Ok(SearchService::new(
        Arc::new(provider),
        generator,
        PageWriter::new(&config.static_pages_dir),
    ))
}

async fn serve(service: SearchService, config: &Config) -> Result<()> {
    let app = server::build_app(service, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("🏠 Listing Scout API on {}", addr);
    info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn print_search(service: &SearchService, query: &str) -> Result<()> {
    let response = service.search(query).await?;

    info!("✅ Found {} properties", response.results.len());
    println!("{}", response.search_summary);
    println!();

    for (i, listing) in response.results.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, format_dollars(listing.price));
        println!("   {}", listing.location_text);
        if !listing.features.is_empty() {
            println!("   Features: {}", listing.features.join(", "));
        }
        println!("   ID: {}", listing.id);
        println!();
    }

    if let Some(url) = &response.static_page_url {
        println!("Results page: {}", url);
    }
    if let Some(overview) = &response.location_overview {
        println!();
        println!("{}", overview);
    }

    Ok(())
}
