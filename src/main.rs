//! Entry point: load config, wire dependencies, and run the server.

use ledger::auth::JwtKeys;
use ledger::config::Config;
use ledger::repositories::{InMemoryTransactionRepository, InMemoryUserRepository};
use ledger::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let jwt = JwtKeys::new(&config.jwt_secret, config.token_ttl_secs);
    let state = AppState::new(
        jwt,
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryTransactionRepository::new()),
    );
    state.auth_service().seed(&config.seed_users).await?;
    tracing::info!(users = config.seed_users.len(), "user store seeded");

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
