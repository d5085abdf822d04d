//! Insertion-ordered roster of team names.
//!
//! The roster holds names only. Display resolves each name through the
//! registry, so it can never show stale ratings. Registration and load are
//! the only writers, and both update the registry in the same call.

use crate::types::TeamName;

#[derive(Debug, Default)]
pub struct RosterList {
    names: Vec<TeamName>,
}

impl RosterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: TeamName) {
        self.names.push(name);
    }

    pub fn names(&self) -> &[TeamName] {
        &self.names
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
