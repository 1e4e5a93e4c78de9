use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use faq_api::config::ApiConfig;
use faq_api::embedded_web::list_embedded_files;
use faq_api::handlers::AppState;
use faq_api::routes::configure_routes;
use faq_api::store::FaqStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "faq-api", version, about = "FAQ manager REST API and web UI")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the config file and PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON file holding the FAQ collection
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", ApiConfig::default_toml()?);
        return Ok(());
    }

    let (mut config, config_path) =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!("Configuration resolved from {}", config_path.display());

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data_file) = cli.data_file {
        config.storage.path = data_file;
    }

    let store = Arc::new(FaqStore::new(config.storage.path.clone()));
    store
        .ensure_parent_dir()
        .with_context(|| format!("Failed to create data directory for {}", store.path().display()))?;
    info!(
        path = %store.path().display(),
        count = store.read_all().len(),
        "FAQ store ready"
    );
    info!("Serving {} embedded web assets", list_embedded_files().len());

    let app_state = web::Data::new(AppState::new(store));
    let cors_config = config.cors.clone();
    let bind_addr = config.bind_addr();

    info!("Starting faq-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(faq_api::cors_from_config(&cors_config))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {bind_addr}"))?
    .run()
    .await?;

    Ok(())
}
