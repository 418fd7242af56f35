use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use todoserver::config::AppConfig;
use todoserver::shared::state::AppState;
use todoserver::shared::utils::create_pool;
use todoserver::todos::{handlers, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let pool = create_pool(&config.database_url)?;
    let store = TodoStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("Failed to initialize database schema")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState { config, store });
    let app = handlers::routes().with_state(state);

    info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
