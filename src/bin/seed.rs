//! Populates the configured storage backend with the sample fleet.
//!
//! Opens the same backend the server would (PostgreSQL when DATABASE_URL is
//! set, in-memory otherwise) and inserts the sample records, skipping any
//! whose business id already exists. Safe to run repeatedly.

use anyhow::Context;
use tracing::info;

use fleet_management_api::routes::AppState;
use fleet_management_api::services::seed_fleet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if std::env::var("DATABASE_URL").is_err() {
        info!("DATABASE_URL not set; seeding an in-memory store only exercises the data");
    }

    let state = AppState::from_env()
        .await
        .context("failed to initialize storage")?;

    let summary = seed_fleet(state.store.as_ref())
        .await
        .context("seeding failed")?;
    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "seed complete"
    );

    state.close().await;
    Ok(())
}
