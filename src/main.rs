use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use the library instead of redeclaring modules
use malayalam_catalog::{
    cache::MovieCache,
    config::{Config, API_KEY_PLACEHOLDER},
    refresher::{CatalogRefresher, RefreshOptions},
    tmdb::TmdbClient,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "malayalam-catalog")]
#[command(version)]
#[command(about = "A Stremio catalog addon serving Malayalam movies currently available on OTT")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("malayalam_catalog={},tower_http=trace", cli.log_level)
    } else {
        format!("malayalam_catalog={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Malayalam Catalog Addon v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    if config.tmdb.api_key == API_KEY_PLACEHOLDER {
        warn!("TMDB API key is not configured; refresh runs will come back empty");
    }

    let cache = MovieCache::new();
    let client = TmdbClient::new(&config.tmdb);
    let refresher = CatalogRefresher::new(
        client,
        cache.clone(),
        RefreshOptions::from_config(&config.tmdb),
    );

    // Populate the cache in the background; the server starts serving
    // whatever is cached (initially nothing) right away.
    let initial = refresher.clone();
    tokio::spawn(async move {
        initial.refresh().await;
    });
    info!("Initial catalog refresh started");

    let web_server = WebServer::new(&config, cache, refresher)?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
