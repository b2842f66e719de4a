use clap::Parser;

use crate::scoreboard::ids::DEFAULT_ID_LENGTH;

/// Live scoreboard with a web dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// JSON file with matches to pre-seed the scoreboard with
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<String>,

    /// Length of generated match ids
    #[arg(long, env = "ID_LENGTH", default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,

    /// Points added by one click on a team's "+" button
    #[arg(long, env = "POINTS_PER_CLICK", default_value = "1")]
    pub points_per_click: u32,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(8..=64).contains(&self.id_length) {
            anyhow::bail!("id_length must be between 8 and 64");
        }
        if self.points_per_click == 0 {
            anyhow::bail!("points_per_click must be positive");
        }
        self.dashboard_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid dashboard_addr {:?}: {}", self.dashboard_addr, e))?;
        Ok(())
    }
}
