//! The tournament engine: wires every structure together.
//!
//! OPERATION ORDER within a round (fixed):
//!   1. schedule():  registry snapshot -> seeding heap -> match queue
//!   2. simulate():  drain queue pairwise, mutate registry, record result
//!   3. undo_last(): optional, one resolution per call
//!
//! RULES:
//!   - Team state is mutated only through the registry's find_mut().
//!   - Heap and leaderboard work on snapshot copies and never write back.
//!   - Registry, roster and graph vertices change together or not at all.
//!   - Every resolution pushes one undo entry and one result; non-BYE
//!     resolutions also add one graph edge.
//!   - Undo reverts team stats only. The result and graph edge stay.
//!   - Every state change is appended to the event log.

use crate::{
    config::TourneyConfig,
    error::{TourneyError, TourneyResult},
    event::TourneyEvent,
    graph::PerformanceGraph,
    heap::SeedingHeap,
    leaderboard::{merge_sort_by_rating, top_rated},
    queue::MatchQueue,
    registry::TeamRegistry,
    results::{ResultRecord, ResultsTree},
    rng::ProbabilitySource,
    roster::RosterList,
    store::TeamStore,
    team::Team,
    types::{Round, TeamName, BYE},
    undo::{MatchOutcome, UndoStack},
};

/// A seeded team as placed in the match queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    /// 1-based seed number.
    pub seed:   usize,
    pub name:   TeamName,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    /// 1-based match number within the round.
    pub number: usize,
    pub home:   Seed,
    /// `None` when `home` gets a BYE.
    pub away:   Option<Seed>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Scheduled { round: Round, pairings: Vec<Pairing> },
    NotEnoughTeams { registered: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    NothingScheduled,
    /// Resolutions in the order they happened.
    Completed { round: Round, outcomes: Vec<MatchOutcome> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    NothingToSave,
    Saved { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    NoFile,
    Loaded { count: usize },
}

pub struct Tournament {
    config:   TourneyConfig,
    registry: TeamRegistry,
    roster:   RosterList,
    queue:    MatchQueue,
    undo:     UndoStack,
    results:  ResultsTree,
    graph:    PerformanceGraph,
    round:    Round,
    events:   Vec<TourneyEvent>,
}

impl Tournament {
    pub fn new(config: TourneyConfig) -> TourneyResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: TeamRegistry::new(config.bucket_count),
            roster:   RosterList::new(),
            queue:    MatchQueue::new(),
            undo:     UndoStack::new(),
            results:  ResultsTree::new(),
            graph:    PerformanceGraph::new(config.graph_initial_capacity),
            round:    0,
            events:   Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &TourneyConfig {
        &self.config
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn events(&self) -> &[TourneyEvent] {
        &self.events
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    pub fn match_queue(&self) -> &MatchQueue {
        &self.queue
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    pub fn graph(&self) -> &PerformanceGraph {
        &self.graph
    }

    // ── Registration ───────────────────────────────────────────

    pub fn register_team(&mut self, name: &str, rating: f64) -> TourneyResult<()> {
        if name.trim().is_empty() {
            return Err(TourneyError::InvalidTeam { reason: "name must not be blank".into() });
        }
        if name == BYE {
            return Err(TourneyError::InvalidTeam {
                reason: format!("'{BYE}' is reserved for unopposed rounds"),
            });
        }
        if !rating.is_finite() {
            return Err(TourneyError::InvalidTeam {
                reason: format!("rating must be a finite number, got {rating}"),
            });
        }
        if self.registry.contains(name) {
            return Err(TourneyError::DuplicateTeam { name: name.to_string() });
        }

        self.admit(Team::new(name, rating));
        log::info!("registered '{name}' at {rating}");
        self.record(TourneyEvent::TeamRegistered { name: name.to_string(), rating });
        Ok(())
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.registry.find(name)
    }

    pub fn team_count(&self) -> usize {
        self.registry.len()
    }

    /// Teams in registration order, with current stats.
    pub fn teams(&self) -> Vec<&Team> {
        self.roster
            .names()
            .iter()
            .filter_map(|name| self.registry.find(name))
            .collect()
    }

    // ── Scheduling ─────────────────────────────────────────────

    /// Seed every registered team by rating and queue the round's matches.
    /// Anything left in the queue from an earlier round is discarded.
    pub fn schedule(&mut self) -> ScheduleOutcome {
        self.queue.clear();

        let snapshot = self.registry.snapshot();
        if snapshot.len() < 2 {
            return ScheduleOutcome::NotEnoughTeams { registered: snapshot.len() };
        }

        self.round += 1;
        let round = self.round;
        let seeds = SeedingHeap::from_teams(snapshot).into_seed_order();

        let mut pairings = Vec::with_capacity(seeds.len().div_ceil(2));
        for (i, pair) in seeds.chunks(2).enumerate() {
            let number = i + 1;
            let home = Seed { seed: 2 * i + 1, name: pair[0].name.clone(), rating: pair[0].rating };
            self.queue.enqueue(home.name.clone());

            let away = pair.get(1).map(|t| Seed {
                seed:   2 * i + 2,
                name:   t.name.clone(),
                rating: t.rating,
            });
            match &away {
                Some(away) => {
                    self.queue.enqueue(away.name.clone());
                    self.record(TourneyEvent::MatchScheduled {
                        round,
                        number,
                        home:      home.name.clone(),
                        home_seed: home.seed,
                        away:      away.name.clone(),
                        away_seed: away.seed,
                    });
                }
                None => {
                    self.record(TourneyEvent::ByeScheduled {
                        round,
                        number,
                        team: home.name.clone(),
                        seed: home.seed,
                    });
                }
            }
            pairings.push(Pairing { number, home, away });
        }

        log::info!("round {round}: {} matches scheduled", pairings.len());
        ScheduleOutcome::Scheduled { round, pairings }
    }

    // ── Simulation ─────────────────────────────────────────────

    /// Drain the match queue, drawing each result from `source`.
    pub fn simulate<P: ProbabilitySource + ?Sized>(&mut self, source: &mut P) -> SimulationOutcome {
        if self.queue.is_empty() {
            return SimulationOutcome::NothingScheduled;
        }

        let mut outcomes = Vec::with_capacity(self.queue.len().div_ceil(2));
        while !self.queue.is_empty() {
            let first = self.queue.dequeue();
            if self.queue.is_empty() {
                outcomes.extend(self.resolve_bye(&first));
                break;
            }
            let second = self.queue.dequeue();
            outcomes.extend(self.resolve_match(&first, &second, source));
        }

        log::info!("round {}: {} matches resolved", self.round, outcomes.len());
        SimulationOutcome::Completed { round: self.round, outcomes }
    }

    fn resolve_bye(&mut self, name: &str) -> Option<MatchOutcome> {
        let Some(rating_before) = self.registry.find(name).map(|t| t.rating) else {
            log::warn!("round {}: BYE team '{name}' no longer registered, skipped", self.round);
            return None;
        };
        let outcome = self.apply_win(name, BYE, rating_before);
        self.record(TourneyEvent::ByeAwarded {
            round:        self.round,
            team:         name.to_string(),
            rating_delta: outcome.rating_delta,
        });
        Some(outcome)
    }

    fn resolve_match<P: ProbabilitySource + ?Sized>(
        &mut self,
        home: &str,
        away: &str,
        source: &mut P,
    ) -> Option<MatchOutcome> {
        let (Some(home_rating), Some(away_rating)) = (
            self.registry.find(home).map(|t| t.rating),
            self.registry.find(away).map(|t| t.rating),
        ) else {
            log::warn!(
                "round {}: {home} vs {away} references an unknown team, skipped",
                self.round
            );
            return None;
        };

        let win_probability = home_win_probability(home_rating, away_rating);
        let (winner, loser, winner_rating) = if source.chance(win_probability) {
            (home, away, home_rating)
        } else {
            (away, home, away_rating)
        };

        let outcome = self.apply_win(winner, loser, winner_rating);
        log::debug!(
            "round {}: {winner} defeated {loser} (p_home={win_probability:.3})",
            self.round
        );
        self.record(TourneyEvent::MatchResolved {
            round:        self.round,
            winner:       winner.to_string(),
            loser:        loser.to_string(),
            win_probability,
            rating_delta: outcome.rating_delta,
        });
        Some(outcome)
    }

    /// Mutate both records through the registry and log the result everywhere.
    fn apply_win(&mut self, winner: &str, loser: &str, winner_rating_before: f64) -> MatchOutcome {
        let rating_delta = self.config.rating_bonus;
        if let Some(team) = self.registry.find_mut(winner) {
            team.wins += 1;
            team.rating += rating_delta;
        }
        if loser != BYE {
            if let Some(team) = self.registry.find_mut(loser) {
                team.losses += 1;
            }
        }

        let outcome = MatchOutcome {
            winner:  winner.to_string(),
            loser:   loser.to_string(),
            rating_delta,
            winner_rating_before,
        };
        self.undo.push(outcome.clone());
        self.results.insert(winner, loser);
        self.graph.add_match(winner, loser);
        outcome
    }

    // ── Undo ───────────────────────────────────────────────────

    /// Revert the most recent resolution's team stats.
    /// `None` when there is nothing to undo.
    pub fn undo_last(&mut self) -> Option<MatchOutcome> {
        if self.undo.is_empty() {
            log::info!("undo requested with empty history");
            return None;
        }

        let outcome = self.undo.pop();
        if let Some(team) = self.registry.find_mut(&outcome.winner) {
            team.wins = team.wins.saturating_sub(1);
            team.rating = outcome.winner_rating_before;
        }
        if !outcome.is_bye() {
            if let Some(team) = self.registry.find_mut(&outcome.loser) {
                team.losses = team.losses.saturating_sub(1);
            }
        }

        log::info!("undid {} vs {}", outcome.winner, outcome.loser);
        self.record(TourneyEvent::MatchUndone {
            winner:       outcome.winner.clone(),
            loser:        outcome.loser.clone(),
            rating_delta: outcome.rating_delta,
        });
        Some(outcome)
    }

    // ── Queries ────────────────────────────────────────────────

    /// Every team, rating descending; equal ratings keep snapshot order.
    pub fn leaderboard(&self) -> Vec<Team> {
        let mut standings = self.registry.snapshot();
        merge_sort_by_rating(&mut standings);
        standings
    }

    /// All recorded results ordered by winner name. Undone matches remain.
    pub fn results(&self) -> Vec<&ResultRecord> {
        self.results.in_order()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Teams with at least one win and who they beat, most recent first.
    pub fn performance(&self) -> Vec<(&str, Vec<&str>)> {
        self.graph.listing()
    }

    /// Did `team_a` beat `team_b` directly or through a chain of wins?
    pub fn has_beaten(&self, team_a: &str, team_b: &str) -> TourneyResult<bool> {
        self.graph.has_beaten(team_a, team_b)
    }

    /// Current highest-rated team. Needs at least two registered teams.
    pub fn predict_winner(&self) -> Option<Team> {
        if self.registry.len() < 2 {
            return None;
        }
        top_rated(&self.registry.snapshot()).cloned()
    }

    // ── Persistence ────────────────────────────────────────────

    pub fn save(&mut self, store: &TeamStore) -> TourneyResult<SaveOutcome> {
        let snapshot = self.registry.snapshot();
        if snapshot.is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }
        store.save(&snapshot)?;
        self.record(TourneyEvent::TeamsSaved {
            path:  store.path().display().to_string(),
            count: snapshot.len(),
        });
        Ok(SaveOutcome::Saved { count: snapshot.len() })
    }

    /// Replace the whole tournament with the standings in `store`.
    /// History (results, graph edges, undo) starts empty. A missing file
    /// leaves the current state untouched.
    pub fn load(&mut self, store: &TeamStore) -> TourneyResult<LoadOutcome> {
        let Some(teams) = store.load()? else {
            return Ok(LoadOutcome::NoFile);
        };

        self.registry.clear();
        self.roster.clear();
        self.graph.clear();
        self.results = ResultsTree::new();
        self.undo.clear();
        self.queue.clear();

        for team in teams {
            if self.registry.contains(&team.name) {
                log::warn!("team file lists '{}' twice, keeping the later record", team.name);
                self.registry.insert(team);
            } else {
                self.admit(team);
            }
        }

        let count = self.registry.len();
        self.record(TourneyEvent::TeamsLoaded {
            path: store.path().display().to_string(),
            count,
        });
        Ok(LoadOutcome::Loaded { count })
    }

    /// Add a new team to registry, roster and graph together.
    fn admit(&mut self, team: Team) {
        let name = team.name.clone();
        self.graph.add_team(&name);
        self.registry.insert(team);
        self.roster.push(name);
        debug_assert_eq!(self.roster.names().len(), self.registry.len());
    }

    fn record(&mut self, event: TourneyEvent) {
        log::debug!("event: {}", event.type_name());
        self.events.push(event);
    }
}

/// Probability that the home team wins, from the two ratings.
/// A non-positive total is treated as 1.
pub fn home_win_probability(home_rating: f64, away_rating: f64) -> f64 {
    let mut total = home_rating + away_rating;
    if total <= 0.0 {
        total = 1.0;
    }
    home_rating / total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_is_rating_share() {
        assert_eq!(home_win_probability(300.0, 100.0), 0.75);
        assert_eq!(home_win_probability(1.0, 1.0), 0.5);
    }

    #[test]
    fn non_positive_total_treated_as_one() {
        assert_eq!(home_win_probability(0.0, 0.0), 0.0);
        assert_eq!(home_win_probability(2.0, -5.0), 2.0);
    }

    #[test]
    fn graph_starts_at_configured_capacity() {
        let config = TourneyConfig { graph_initial_capacity: 3, ..TourneyConfig::default_test() };
        let t = Tournament::new(config).unwrap();
        assert_eq!(t.config().graph_initial_capacity, 3);
        assert_eq!(t.graph().capacity(), 3);
    }
}
