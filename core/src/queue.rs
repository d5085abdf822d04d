//! Match queue: FIFO of team names for the current simulation round.
//!
//! Scheduling enqueues seeds in pairs (1 v 2, 3 v 4, ...). With an odd
//! count the last seed goes in alone; simulation finds no partner after
//! dequeuing it and resolves a BYE.

use crate::types::TeamName;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct MatchQueue {
    entries: VecDeque<TeamName>,
}

impl MatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, name: TeamName) {
        self.entries.push_back(name);
    }

    /// Panics if the queue is empty; callers must check is_empty().
    pub fn dequeue(&mut self) -> TeamName {
        let Some(name) = self.entries.pop_front() else {
            panic!("dequeue() called on empty match queue");
        };
        name
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Front-to-back view of queued names.
    pub fn iter(&self) -> impl Iterator<Item = &TeamName> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
