use clap::Parser;
use dotenvy::dotenv;
use std::env;

use finance_visualizer::api::{config::ApiConfig, router::build_router};
use finance_visualizer::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let api_config = ApiConfig::parse();

    let app_config = match (&api_config.database_url, api_config.in_memory) {
        (_, true) => {
            tracing::warn!("Running with the in-memory store, records are lost on shutdown");
            AppConfig::in_memory()
        }
        (Some(database_url), false) => AppConfig::from_database_url(database_url)?,
        (None, false) => anyhow::bail!("DATABASE_URL must be set, or pass --in-memory"),
    };
    tracing::info!("Application configuration loaded successfully");

    let router = build_router(app_config);

    let addr = api_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting finance API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
