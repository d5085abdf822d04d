//! Tournament event log.
//!
//! RULE: Every state change the tournament makes is appended here, in the
//! order it happened. The log is write-only during a session; it can be
//! dumped as JSON lines for replay or inspection.

use crate::types::{Round, TeamName};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourneyEvent {
    TeamRegistered {
        name:   TeamName,
        rating: f64,
    },

    // ── Scheduling ──────────────────────────────
    MatchScheduled {
        round:     Round,
        number:    usize,
        home:      TeamName,
        home_seed: usize,
        away:      TeamName,
        away_seed: usize,
    },
    ByeScheduled {
        round:  Round,
        number: usize,
        team:   TeamName,
        seed:   usize,
    },

    // ── Simulation ──────────────────────────────
    MatchResolved {
        round:           Round,
        winner:          TeamName,
        loser:           TeamName,
        win_probability: f64,
        rating_delta:    f64,
    },
    ByeAwarded {
        round:        Round,
        team:         TeamName,
        rating_delta: f64,
    },
    MatchUndone {
        winner:       TeamName,
        loser:        TeamName,
        rating_delta: f64,
    },

    // ── Persistence ─────────────────────────────
    TeamsSaved {
        path:  String,
        count: usize,
    },
    TeamsLoaded {
        path:  String,
        count: usize,
    },
}

impl TourneyEvent {
    /// Stable snake_case name matching the serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            TourneyEvent::TeamRegistered { .. } => "team_registered",
            TourneyEvent::MatchScheduled { .. } => "match_scheduled",
            TourneyEvent::ByeScheduled { .. }   => "bye_scheduled",
            TourneyEvent::MatchResolved { .. }  => "match_resolved",
            TourneyEvent::ByeAwarded { .. }     => "bye_awarded",
            TourneyEvent::MatchUndone { .. }    => "match_undone",
            TourneyEvent::TeamsSaved { .. }     => "teams_saved",
            TourneyEvent::TeamsLoaded { .. }    => "teams_loaded",
        }
    }
}

/// One JSON object per line.
pub fn write_event_log<W: Write>(
    out: &mut W,
    events: &[TourneyEvent],
) -> crate::error::TourneyResult<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
