//! Undo stack: LIFO log of match resolutions.
//!
//! Each entry carries exactly what is needed to invert one resolution.
//! Popping does not touch the results tree or the performance graph;
//! those keep the undone match.

use crate::types::{TeamName, BYE};
use serde::{Deserialize, Serialize};

/// One resolved match, as recorded for undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner:       TeamName,
    /// The BYE sentinel when the winner advanced unopposed.
    pub loser:        TeamName,
    pub rating_delta: f64,
    /// Winner's rating before the bonus; undo restores this value.
    pub winner_rating_before: f64,
}

impl MatchOutcome {
    pub fn is_bye(&self) -> bool {
        self.loser == BYE
    }
}

#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<MatchOutcome>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: MatchOutcome) {
        self.entries.push(outcome);
    }

    /// Panics if the stack is empty; callers must check is_empty().
    pub fn pop(&mut self) -> MatchOutcome {
        let Some(outcome) = self.entries.pop() else {
            panic!("pop() called on empty undo stack");
        };
        outcome
    }

    pub fn peek(&self) -> Option<&MatchOutcome> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Top-first view: the next entry undo would pop comes first.
    pub fn iter(&self) -> impl Iterator<Item = &MatchOutcome> {
        self.entries.iter().rev()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
