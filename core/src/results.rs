//! Results tree: unbalanced BST keyed by winner name.
//!
//! Nodes live in an arena and link by index. Equal winners go right, so an
//! in-order walk lists a winner's results in the order they were recorded.
//! Sorted insert order degrades the tree to a list; traversal is iterative
//! so depth is never a stack concern.

use crate::types::TeamName;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub winner: TeamName,
    pub loser:  TeamName,
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} defeated {}", self.winner, self.loser)
    }
}

struct ResultNode {
    record: ResultRecord,
    left:   Option<usize>,
    right:  Option<usize>,
}

#[derive(Default)]
pub struct ResultsTree {
    nodes: Vec<ResultNode>,
    root:  Option<usize>,
}

impl ResultsTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, winner: impl Into<TeamName>, loser: impl Into<TeamName>) {
        let record = ResultRecord { winner: winner.into(), loser: loser.into() };
        let new_index = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(ResultNode { record, left: None, right: None });
            self.root = Some(new_index);
            return;
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = if record.winner < node.record.winner {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_index);
                    break;
                }
            }
        }
        self.nodes.push(ResultNode { record, left: None, right: None });
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All results ordered by winner name.
    pub fn in_order(&self) -> Vec<&ResultRecord> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut pending: Vec<usize> = Vec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !pending.is_empty() {
            while let Some(index) = cursor {
                pending.push(index);
                cursor = self.nodes[index].left;
            }
            if let Some(index) = pending.pop() {
                out.push(&self.nodes[index].record);
                cursor = self.nodes[index].right;
            }
        }
        out
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[index];
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}
