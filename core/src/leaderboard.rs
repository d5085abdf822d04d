//! Leaderboard ordering: top-down merge sort, rating descending.
//!
//! The merge takes from the left run on `>=`, so teams with equal ratings
//! keep their snapshot order.

use crate::team::Team;

pub fn merge_sort_by_rating(teams: &mut [Team]) {
    if teams.len() < 2 {
        return;
    }
    let mid = teams.len() / 2;
    merge_sort_by_rating(&mut teams[..mid]);
    merge_sort_by_rating(&mut teams[mid..]);
    merge(teams, mid);
}

fn merge(teams: &mut [Team], mid: usize) {
    let left = teams[..mid].to_vec();
    let right = teams[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in teams.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i].rating >= right[j].rating);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Highest-rated team; the earliest wins a tie.
pub fn top_rated(teams: &[Team]) -> Option<&Team> {
    let mut best: Option<&Team> = None;
    for team in teams {
        if best.map_or(true, |b| team.rating > b.rating) {
            best = Some(team);
        }
    }
    best
}
