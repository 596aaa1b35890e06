use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::AppConfig;
use mergington_activities::database::ActivityStore;
use mergington_activities::services::RosterService;
use mergington_activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington_activities=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let store = Arc::new(ActivityStore::seeded());
    info!(
        activities = store.len(),
        build = env!("MERGINGTON_BUILD_ID"),
        "roster loaded"
    );

    let app = web::build_router(RosterService::new(store), &config.static_dir);

    let addr = config.addr().context("invalid HOST/PORT")?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr().context("invalid fallback port")?;
            warn!("could not bind {}: {}, trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
