use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, warn};

use crate::scoreboard::{Match, Scoreboard, Side};

/// Rejections raised before a match reaches the scoreboard
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartGameError {
    #[error("Please enter both team names")]
    MissingTeamName,
    #[error("One of the teams is already playing")]
    TeamAlreadyPlaying { home: String, away: String },
}

/// Holds the current scoreboard and swaps in each successor value.
///
/// This is the validating caller the scoreboard expects: names are trimmed
/// and checked before `start_game` is called. Clones share the same cell.
#[derive(Clone)]
pub struct ScoreboardService {
    board: Arc<Mutex<Scoreboard>>,
    points_per_click: u32,
}

impl ScoreboardService {
    pub fn new(board: Scoreboard) -> Self {
        ScoreboardService {
            board: Arc::new(Mutex::new(board)),
            points_per_click: 1,
        }
    }

    /// Points added by `score`
    pub fn with_points_per_click(mut self, points: u32) -> Self {
        self.points_per_click = points;
        self
    }

    /// The current scoreboard value
    pub fn snapshot(&self) -> Scoreboard {
        self.board.lock().unwrap().clone()
    }

    pub fn summary(&self) -> Vec<Match> {
        self.board.lock().unwrap().summary()
    }

    pub fn start_game(&self, home: &str, away: &str) -> Result<Match, StartGameError> {
        let home = home.trim();
        let away = away.trim();
        if home.is_empty() || away.is_empty() {
            return Err(StartGameError::MissingTeamName);
        }

        let mut board = self.board.lock().unwrap();
        if board.team_playing(&[home, away]) {
            warn!("Rejected {} vs {}: team already playing", home, away);
            return Err(StartGameError::TeamAlreadyPlaying {
                home: home.to_string(),
                away: away.to_string(),
            });
        }

        let next = board.start_game(home, away);
        let started = next
            .matches()
            .last()
            .cloned()
            .expect("start_game always appends a match");
        *board = next;
        info!("Match started: {} (id={})", started, started.id);
        Ok(started)
    }

    /// Add points to one side. Returns the updated match, or `None` for an unknown id.
    pub fn add_points(&self, match_id: &str, side: Side, points: u32) -> Option<Match> {
        let mut board = self.board.lock().unwrap();
        let next = board.add_points(match_id, side, points);
        let updated = next.get(match_id).cloned();
        *board = next;
        match &updated {
            Some(m) => info!(
                "Score update: {} (+{} {}, now {})",
                m,
                points,
                side,
                m.team(side).score
            ),
            None => warn!("Ignored points for unknown match {}", match_id),
        }
        updated
    }

    /// One click on a team's "+" button
    pub fn score(&self, match_id: &str, side: Side) -> Option<Match> {
        self.add_points(match_id, side, self.points_per_click)
    }

    /// Remove a match. Returns the finished match, or `None` for an unknown id.
    pub fn finish_game(&self, match_id: &str) -> Option<Match> {
        let mut board = self.board.lock().unwrap();
        let finished = board.get(match_id).cloned();
        *board = board.finish_game(match_id);
        match &finished {
            Some(m) => info!("Match finished: {} (id={})", m, m.id),
            None => warn!("Ignored finish for unknown match {}", match_id),
        }
        finished
    }
}
