use std::sync::Arc;

use anyhow::Context;
use faq_bot::config::AppConfig;
use faq_bot::handlers::AppState;
use faq_bot::routes::configure_routes;
use faq_bot::store::FaqStore;
use faq_bot::upstream::OpenRouterClient;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    if config.upstream.api_key().is_none() {
        warn!("OPENROUTER_API_KEY is not set; every /ask request will fail");
    }

    let store = FaqStore::new(&config.db_path);
    store.initialize().context("Failed to initialize database")?;

    let client = OpenRouterClient::new(config.upstream.clone())
        .context("Failed to create upstream client")?;
    let state = AppState::new(Arc::new(client), store);

    let routes = configure_routes(state);

    info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;
    Ok(())
}
