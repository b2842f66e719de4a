use std::fmt;
use std::sync::Arc;

use super::ids::{IdGenerator, RandomIds};
use super::models::{Match, Side, TeamScore};

/// Immutable collection of in-progress matches, kept in start order.
///
/// Every transition returns a new `Scoreboard` and leaves `self` as it was,
/// so earlier values can be held on to as snapshots.
///
/// The scoreboard trusts its caller: `start_game` does not check for empty
/// names or for a team that is already playing. Callers are expected to run
/// those checks (see [`Scoreboard::team_playing`]) before starting a match;
/// `ScoreboardService` does exactly that.
#[derive(Clone)]
pub struct Scoreboard {
    matches: Vec<Match>,
    ids: Arc<dyn IdGenerator>,
}

impl Scoreboard {
    /// Scoreboard holding `matches` in the given order. Nothing is validated.
    pub fn new(matches: Vec<Match>) -> Self {
        Scoreboard {
            matches,
            ids: Arc::new(RandomIds::default()),
        }
    }

    /// Replace the id supplier used by `start_game` (and by every successor).
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    fn successor(&self, matches: Vec<Match>) -> Scoreboard {
        Scoreboard {
            matches,
            ids: Arc::clone(&self.ids),
        }
    }

    /// Matches in start order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if any of `names` is the home or away team of a current match.
    pub fn team_playing(&self, names: &[&str]) -> bool {
        self.matches.iter().any(|m| m.involves_any(names))
    }

    /// Append a new 0-0 match with a fresh id.
    pub fn start_game(&self, home: &str, away: &str) -> Scoreboard {
        let mut matches = self.matches.clone();
        matches.push(Match {
            id: self.ids.next_id(),
            home: TeamScore::new(home),
            away: TeamScore::new(away),
        });
        self.successor(matches)
    }

    /// Add `points` to one side of a match. An unknown id yields an unchanged copy.
    pub fn add_points(&self, match_id: &str, side: Side, points: u32) -> Scoreboard {
        let matches = self
            .matches
            .iter()
            .map(|m| {
                if m.id == match_id {
                    m.with_points(side, points)
                } else {
                    m.clone()
                }
            })
            .collect();
        self.successor(matches)
    }

    /// Drop a match. An unknown id yields an unchanged copy.
    pub fn finish_game(&self, match_id: &str) -> Scoreboard {
        let matches = self
            .matches
            .iter()
            .filter(|m| m.id != match_id)
            .cloned()
            .collect();
        self.successor(matches)
    }

    /// Ranked view: highest total score first, ties broken by most recent start.
    ///
    /// Reversing first and then sorting with a stable sort is what produces
    /// the recency tie-break; `sort_by` keeps equal elements in input order.
    pub fn summary(&self) -> Vec<Match> {
        let mut ranked: Vec<Match> = self.matches.iter().rev().cloned().collect();
        ranked.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        ranked
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard::new(Vec::new())
    }
}

impl PartialEq for Scoreboard {
    /// Content equality; the id supplier is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.matches == other.matches
    }
}

impl fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoreboard")
            .field("matches", &self.matches)
            .finish_non_exhaustive()
    }
}
