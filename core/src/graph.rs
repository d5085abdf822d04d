//! Performance graph: directed multigraph of wins.
//!
//! One vertex per registered team, added at registration whether or not the
//! team ever plays. One edge winner -> loser per decided match; repeat
//! meetings add repeat edges. BYE rounds add nothing.
//!
//! Edges are never removed, undo included, so contradictory edges (cycles)
//! are possible. The reachability search tracks visited vertices and always
//! terminates.

use crate::{
    error::{TourneyError, TourneyResult},
    types::{TeamName, BYE},
};
use std::collections::HashMap;

struct Vertex {
    name:     TeamName,
    /// Defeated opponents as vertex indices, oldest first.
    defeated: Vec<usize>,
}

pub struct PerformanceGraph {
    vertices: Vec<Vertex>,
    index:    HashMap<TeamName, usize>,
    capacity: usize,
}

impl PerformanceGraph {
    /// Panics if `initial_capacity` is 0; callers validate config first.
    pub fn new(initial_capacity: usize) -> Self {
        assert!(initial_capacity > 0, "graph capacity must be at least 1");
        Self {
            vertices: Vec::with_capacity(initial_capacity),
            index:    HashMap::with_capacity(initial_capacity),
            capacity: initial_capacity,
        }
    }

    /// Add a vertex. Known names are ignored.
    pub fn add_team(&mut self, name: &str) {
        if self.index.contains_key(name) {
            return;
        }
        if self.vertices.len() == self.capacity {
            self.grow();
        }
        self.index.insert(name.to_string(), self.vertices.len());
        self.vertices.push(Vertex { name: name.to_string(), defeated: Vec::new() });
    }

    /// Record winner -> loser. A BYE loser records nothing.
    pub fn add_match(&mut self, winner: &str, loser: &str) {
        if loser == BYE {
            return;
        }
        self.add_team(winner);
        self.add_team(loser);

        let (Some(&w), Some(&l)) = (self.index.get(winner), self.index.get(loser)) else {
            return;
        };
        self.vertices[w].defeated.push(l);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.defeated.len()).sum()
    }

    /// Current vertex capacity under the doubling policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Opponents `name` has beaten, most recent first.
    pub fn defeated_by(&self, name: &str) -> Option<Vec<&str>> {
        let &v = self.index.get(name)?;
        Some(self.defeated_names(v))
    }

    /// Every vertex with at least one outgoing edge, in registration order,
    /// with its defeated opponents most recent first.
    pub fn listing(&self) -> Vec<(&str, Vec<&str>)> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.defeated.is_empty())
            .map(|(i, v)| (v.name.as_str(), self.defeated_names(i)))
            .collect()
    }

    /// True if a chain of recorded wins leads from `team_a` to `team_b`.
    /// A team trivially reaches itself. Unknown names are an error, not false.
    pub fn has_beaten(&self, team_a: &str, team_b: &str) -> TourneyResult<bool> {
        let start = self.vertex_of(team_a)?;
        let target = self.vertex_of(team_b)?;
        if start == target {
            return Ok(true);
        }

        let mut visited = vec![false; self.vertices.len()];
        let mut pending = vec![start];
        visited[start] = true;

        while let Some(current) = pending.pop() {
            // Newest edge first, same walk order as the listing.
            for &next in self.vertices[current].defeated.iter().rev() {
                if next == target {
                    return Ok(true);
                }
                if !visited[next] {
                    visited[next] = true;
                    pending.push(next);
                }
            }
        }
        Ok(false)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
    }

    fn vertex_of(&self, name: &str) -> TourneyResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| TourneyError::TeamNotFound { name: name.to_string() })
    }

    fn defeated_names(&self, v: usize) -> Vec<&str> {
        self.vertices[v]
            .defeated
            .iter()
            .rev()
            .map(|&l| self.vertices[l].name.as_str())
            .collect()
    }

    fn grow(&mut self) {
        let additional = self.capacity;
        self.vertices.reserve_exact(additional);
        self.index.reserve(additional);
        self.capacity += additional;
        log::debug!("graph: vertex capacity doubled to {}", self.capacity);
    }
}
