use crate::types::TeamName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered team. The registry owns the canonical copy; everything
/// else holds the name and resolves through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name:   TeamName,
    pub rating: f64,
    pub wins:   u32,
    pub losses: u32,
}

impl Team {
    pub fn new(name: impl Into<TeamName>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
            wins: 0,
            losses: 0,
        }
    }

    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team: {} | Rating: {} | W-L: {}-{}",
            self.name, self.rating, self.wins, self.losses
        )
    }
}
