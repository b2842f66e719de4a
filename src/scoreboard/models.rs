use serde::{Deserialize, Serialize};
use std::fmt;

/// One team's side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
}

impl TeamScore {
    /// A team that has not scored yet
    pub fn new(name: impl Into<String>) -> Self {
        TeamScore {
            name: name.into(),
            score: 0,
        }
    }
}

/// A match in progress on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Opaque unique id, handed out by an `IdGenerator`
    pub id: String,
    pub home: TeamScore,
    pub away: TeamScore,
}

impl Match {
    /// Combined score of both teams; the ranking key of the summary.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home.score) + u64::from(self.away.score)
    }

    pub fn team(&self, side: Side) -> &TeamScore {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut TeamScore {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Copy of this match with `points` added to one side
    pub(crate) fn with_points(&self, side: Side, points: u32) -> Match {
        let mut updated = self.clone();
        let team = updated.team_mut(side);
        team.score = team.score.saturating_add(points);
        updated
    }

    pub fn involves_any(&self, names: &[&str]) -> bool {
        names.contains(&self.home.name.as_str()) || names.contains(&self.away.name.as_str())
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.home.name, self.home.score, self.away.score, self.away.name
        )
    }
}

/// Which team of a match scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}
