//! Wayfarer booking API server.

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wayfarer_web::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wayfarer=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    wayfarer_postgres::create_schema(&pool).await?;

    let state = AppState::new(
        Arc::new(wayfarer_postgres::PostgresBookingStore::new(pool.clone())),
        Arc::new(wayfarer_postgres::PostgresPackageStore::new(pool.clone())),
        Arc::new(wayfarer_postgres::PostgresFeedbackStore::new(pool.clone())),
        Arc::new(wayfarer_postgres::PostgresIdentityResolver::new(pool)),
        config.transition_policy,
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Wayfarer server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
