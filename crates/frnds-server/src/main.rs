mod config;

use tracing::info;

use frnds_api::{AppStateInner, app};
use frnds_store::{Store, seed::seed_demo};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "frnds=debug,frnds_api=debug,frnds_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    // State lives only as long as the process.
    let store = Store::new();
    if config.seed_demo {
        seed_demo(&store)?;
    }
    let state = AppStateInner::new(store);

    let service = app(state, config.body_limit);

    let addr = config.addr()?;
    info!("FRNDS server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, service).await?;

    Ok(())
}
