//! Seeded single-track tournament engine.
//!
//! Teams register with a rating, get seeded into pairs by a max-heap,
//! play probabilistic matches off a FIFO queue, and leave an undo stack,
//! a results BST and a win graph behind them.

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod graph;
pub mod heap;
pub mod leaderboard;
pub mod queue;
pub mod registry;
pub mod results;
pub mod rng;
pub mod roster;
pub mod store;
pub mod team;
pub mod types;
pub mod undo;

pub use config::TourneyConfig;
pub use engine::{
    LoadOutcome, Pairing, SaveOutcome, ScheduleOutcome, Seed, SimulationOutcome, Tournament,
};
pub use error::{TourneyError, TourneyResult};
pub use rng::{FixedDraw, MatchRng, ProbabilitySource};
pub use team::Team;
pub use types::BYE;
pub use undo::MatchOutcome;
