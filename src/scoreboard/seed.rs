use anyhow::{Context, Result};
use std::path::Path;

use super::models::Match;

/// Read a JSON array of matches used to pre-seed the scoreboard.
///
/// The file is trusted the same way `Scoreboard::new` trusts its input:
/// duplicate teams or ids are not rejected.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Match>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let matches: Vec<Match> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(matches)
}
