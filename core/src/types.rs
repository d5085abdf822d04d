//! Shared primitive types used across the tournament engine.

/// The unique, case-sensitive key of a team.
pub type TeamName = String;

/// One scheduling pass. Round 0 means nothing has been scheduled yet.
pub type Round = u32;

/// Sentinel loser recorded for a BYE. Never has a registry entry or graph vertex.
pub const BYE: &str = "bye";
