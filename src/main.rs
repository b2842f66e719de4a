use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use live_scoreboard::config::Config;
use live_scoreboard::dashboard::{self, AppState};
use live_scoreboard::scoreboard::{load_seed, RandomIds, Scoreboard};
use live_scoreboard::service::ScoreboardService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let initial = match &config.seed_file {
        Some(path) => {
            let matches = load_seed(path)?;
            info!("Seeded {} match(es) from {}", matches.len(), path);
            matches
        }
        None => Vec::new(),
    };

    let board = Scoreboard::new(initial).with_ids(Arc::new(RandomIds::new(config.id_length)));
    let service = ScoreboardService::new(board).with_points_per_click(config.points_per_click);

    let app = dashboard::router(AppState { service });
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
