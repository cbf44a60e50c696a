use backend::{
    config::Config,
    queries::PgVoteStore,
    routes::{server, AppState},
};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting game pick service");

    let config = Config::load();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.store_timeout)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("📋 Migrations complete");

    let state = AppState::new(PgVoteStore::new(pool, config.store_timeout));
    let _ = server(state).launch().await?;

    Ok(())
}
