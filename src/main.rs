// src/main.rs
use polls::config::Config;
use polls::routes::{self, AppState};
use polls::templates::Templates;
use polls::{db, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?; // Also loads .env

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polls=info,tower_http=info")),
        )
        .init();

    // Create the database connection pool and bring the schema up to date
    let pool = db::create_pool(&config.database_url).await?;
    db::migrate(&pool).await?;

    let state = AppState::new(pool, Templates::new()?);
    let app = routes::create_routes(state);

    let addr = config.bind_addr()?;
    tracing::info!(%addr, "serving polls");

    // Start the server
    axum_server::bind(addr).serve(app.into_make_service()).await?;
    Ok(())
}
