//! tourney: interactive tournament runner.
//!
//! Usage:
//!   tourney
//!   tourney --seed 12345 --file teams.txt
//!   tourney --config tourney.json --event-log events.jsonl --no-autoload

use anyhow::Result;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use tourney_core::{
    command::MenuCommand,
    event::write_event_log,
    store::TeamStore,
    LoadOutcome, MatchRng, ProbabilitySource, SaveOutcome, ScheduleOutcome, SimulationOutcome,
    Tournament, TourneyConfig, TourneyError,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", clock_seed());
    let autoload = !args.iter().any(|a| a == "--no-autoload");
    let event_log = string_arg(&args, "--event-log");

    let mut config = match string_arg(&args, "--config") {
        Some(path) => TourneyConfig::load(path)?,
        None => TourneyConfig::default(),
    };
    if let Some(path) = string_arg(&args, "--file") {
        config.save_path = path.to_string();
    }

    let tournament = Tournament::new(config)?;
    let store = TeamStore::new(&tournament.config().save_path);
    let rng = MatchRng::new(seed);
    log::info!("seed={} file={}", rng.seed(), store.path().display());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), tournament, store, rng);

    if autoload {
        console.load()?;
    }
    console.run()?;

    if let Some(path) = event_log {
        let mut out = BufWriter::new(File::create(path)?);
        write_event_log(&mut out, console.tournament.events())?;
        log::info!("event log written to {path}");
    }
    Ok(())
}

struct Console<R, W, P> {
    input:      R,
    out:        W,
    tournament: Tournament,
    store:      TeamStore,
    source:     P,
}

impl<R: BufRead, W: Write, P: ProbabilitySource> Console<R, W, P> {
    fn new(input: R, out: W, tournament: Tournament, store: TeamStore, source: P) -> Self {
        Self { input, out, tournament, store, source }
    }

    /// Menu loop. Returns on Exit or end of input.
    fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter Choice: ")? else {
                break;
            };
            let Ok(selection) = line.trim().parse::<u32>() else {
                writeln!(self.out, "Invalid input. Try again.")?;
                continue;
            };
            let Some(command) = MenuCommand::from_selection(selection) else {
                writeln!(self.out, "Invalid choice.")?;
                continue;
            };

            match command {
                MenuCommand::Exit => {
                    if self.confirm("Save data before exiting? (y/n): ")? {
                        self.save()?;
                    }
                    writeln!(self.out, "Exiting...")?;
                    break;
                }
                MenuCommand::RegisterTeam  => self.register()?,
                MenuCommand::ShowTeams     => self.show_teams()?,
                MenuCommand::Schedule      => self.schedule()?,
                MenuCommand::Simulate      => self.simulate()?,
                MenuCommand::UndoLast      => self.undo()?,
                MenuCommand::Leaderboard   => self.leaderboard()?,
                MenuCommand::ShowResults   => self.show_results()?,
                MenuCommand::Performance   => self.performance()?,
                MenuCommand::PredictWinner => self.predict()?,
                MenuCommand::Save          => self.save()?,
                MenuCommand::Load => {
                    writeln!(self.out, "Warning: Loading will overwrite unsaved current data.")?;
                    self.load()?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "===== TOURNAMENT MENU =====")?;
        for command in MenuCommand::ALL {
            let number = format!("{}.", command.selection());
            writeln!(self.out, "{number:<4}{}", command.label())?;
        }
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Team Name: ")? else {
            return Ok(());
        };
        let Some(rating) = self.prompt("Team Rating (float): ")? else {
            return Ok(());
        };
        let Ok(rating) = rating.trim().parse::<f64>() else {
            writeln!(self.out, "Invalid rating. Try again.")?;
            return Ok(());
        };

        match self.tournament.register_team(&name, rating) {
            Ok(()) => writeln!(self.out, "{name} registered successfully.")?,
            Err(TourneyError::DuplicateTeam { .. }) => writeln!(self.out, "Team already exists.")?,
            Err(e) => writeln!(self.out, "{e}")?,
        }
        Ok(())
    }

    fn show_teams(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== REGISTERED TEAMS ===")?;
        let teams = self.tournament.teams();
        if teams.is_empty() {
            writeln!(self.out, "No teams in list.")?;
        }
        for team in teams {
            writeln!(self.out, "{team}")?;
        }
        writeln!(self.out, "=========================")
    }

    fn schedule(&mut self) -> Result<()> {
        let ScheduleOutcome::Scheduled { pairings, .. } = self.tournament.schedule() else {
            writeln!(self.out, "Need at least 2 teams to schedule matches.")?;
            return Ok(());
        };

        writeln!(self.out)?;
        writeln!(self.out, "=== MATCHES SCHEDULED (Seeded by Rating) ===")?;
        for pairing in &pairings {
            let home = &pairing.home;
            match &pairing.away {
                Some(away) => writeln!(
                    self.out,
                    "Match {}: {} (Seed {}) vs {} (Seed {})",
                    pairing.number, home.name, home.seed, away.name, away.seed
                )?,
                None => writeln!(self.out, "Match {}: {} gets a BYE", pairing.number, home.name)?,
            }
        }
        writeln!(self.out, "============================================")?;

        if self.confirm("Simulate these matches now? (y/n): ")? {
            self.simulate()?;
        } else {
            writeln!(self.out, "Returning to main menu...")?;
        }
        Ok(())
    }

    fn simulate(&mut self) -> io::Result<()> {
        let result = self.tournament.simulate(&mut self.source);
        let SimulationOutcome::Completed { outcomes, .. } = result else {
            return writeln!(self.out, "No matches scheduled.");
        };

        writeln!(self.out)?;
        writeln!(self.out, "=== MATCH SIMULATION ===")?;
        for outcome in &outcomes {
            if outcome.is_bye() {
                writeln!(self.out, "{} gets a BYE (wins automatically).", outcome.winner)?;
            } else {
                writeln!(self.out, "{} defeated {}", outcome.winner, outcome.loser)?;
            }
        }
        writeln!(self.out, "All matches simulated!")?;
        writeln!(self.out, "=========================")
    }

    fn undo(&mut self) -> io::Result<()> {
        match self.tournament.undo_last() {
            Some(outcome) => {
                writeln!(self.out, "Undo complete: {} vs {}", outcome.winner, outcome.loser)
            }
            None => writeln!(self.out, "Nothing to undo."),
        }
    }

    fn leaderboard(&mut self) -> io::Result<()> {
        let standings = self.tournament.leaderboard();
        if standings.is_empty() {
            return writeln!(self.out, "No teams.");
        }
        writeln!(self.out)?;
        writeln!(self.out, "=== LEADERBOARD (Sorted by Rating) ===")?;
        for team in &standings {
            writeln!(self.out, "{team}")?;
        }
        writeln!(self.out, "======================================")
    }

    fn show_results(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== MATCH RESULTS (BST) ===")?;
        let results = self.tournament.results();
        if results.is_empty() {
            writeln!(self.out, "No results.")?;
        }
        for record in results {
            writeln!(self.out, "{record}")?;
        }
        writeln!(self.out, "===========================")
    }

    fn performance(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== PERFORMANCE GRAPH (Adjacency List) ===")?;
        let listing = self.tournament.performance();
        if listing.is_empty() {
            writeln!(self.out, "No matches recorded in graph yet.")?;
        }
        for (team, defeated) in listing {
            writeln!(self.out, "{team} defeated -> {}", defeated.join(", "))?;
        }
        writeln!(self.out, "==========================================")?;

        let Some(team_a) = self.prompt("Check for indirect win. Team A: ")? else {
            return Ok(());
        };
        let Some(team_b) = self.prompt("Team B: ")? else {
            return Ok(());
        };
        match self.tournament.has_beaten(&team_a, &team_b) {
            Ok(true) => writeln!(
                self.out,
                "{team_a} has defeated {team_b} (directly or indirectly - via DFS)."
            )?,
            Ok(false) => writeln!(
                self.out,
                "{team_a} has NOT defeated {team_b} (directly or indirectly)."
            )?,
            Err(_) => writeln!(self.out, "One or both teams not found in the graph.")?,
        }
        Ok(())
    }

    fn predict(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== WINNER PREDICTION SYSTEM ===")?;
        match self.tournament.predict_winner() {
            Some(team) => {
                writeln!(self.out, "Prediction based on current max rating: {}", team.name)?
            }
            None => writeln!(self.out, "Not enough teams for prediction.")?,
        }
        writeln!(self.out, "================================")
    }

    fn save(&mut self) -> io::Result<()> {
        match self.tournament.save(&self.store) {
            Ok(SaveOutcome::NothingToSave) => writeln!(self.out, "[Save] No teams to save."),
            Ok(SaveOutcome::Saved { count }) => writeln!(
                self.out,
                "[Save] Success! {count} teams written to {}.",
                self.store.path().display()
            ),
            Err(e) => {
                log::error!("save failed: {e}");
                writeln!(self.out, "[Save] Error: {e}")
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match self.tournament.load(&self.store) {
            Ok(LoadOutcome::NoFile) => {
                writeln!(self.out, "[Load] No saved file found. Starting with 0 teams.")
            }
            Ok(LoadOutcome::Loaded { count }) => {
                writeln!(self.out, "[Load] Success! Loaded {count} teams.")
            }
            Err(e) => {
                log::error!("load failed: {e}");
                writeln!(self.out, "[Load] Error: {e}")
            }
        }
    }

    /// Print `text`, read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        let answer = self.prompt(text)?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y"))
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
