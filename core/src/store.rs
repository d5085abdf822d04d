//! Flat-file persistence for team standings.
//!
//! RULE: Only store.rs reads or writes the team file.
//!
//! Format, two lines per team:
//!
//!   <name>
//!   <rating> <wins> <losses>
//!
//! Only current standings are persisted. Results, undo history and graph
//! edges are not. Reading stops at the first record that fails to parse and
//! keeps everything read before it. A line that is not valid UTF-8 counts
//! as a failed parse; other I/O errors are returned.

use crate::{error::TourneyResult, team::Team, types::BYE};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn write_teams<W: Write>(out: &mut W, teams: &[Team]) -> io::Result<()> {
    for team in teams {
        writeln!(out, "{}", team.name)?;
        writeln!(out, "{} {} {}", team.rating, team.wins, team.losses)?;
    }
    out.flush()
}

pub fn read_teams<R: BufRead>(input: R) -> io::Result<Vec<Team>> {
    let mut teams = Vec::new();
    let mut lines = input.lines();

    while let Some(name) = lines.next() {
        let Some(name) = text_line(name)? else {
            break;
        };
        if name.is_empty() {
            continue;
        }
        let Some(stats) = lines.next() else {
            log::warn!("team file: '{name}' has no stats line, stopping");
            break;
        };
        let Some(stats) = text_line(stats)? else {
            break;
        };
        let Some((rating, wins, losses)) = parse_stats(&stats) else {
            log::warn!("team file: bad stats for '{name}', stopping");
            break;
        };
        if name == BYE {
            log::warn!("team file: skipping reserved name '{BYE}'");
            continue;
        }
        teams.push(Team::new(name, rating).with_record(wins, losses));
    }
    Ok(teams)
}

/// A line that is not valid UTF-8 is a corrupt record: `Ok(None)`.
fn text_line(line: io::Result<String>) -> io::Result<Option<String>> {
    match line {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            log::warn!("team file: unreadable line ({e}), stopping");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn parse_stats(line: &str) -> Option<(f64, u32, u32)> {
    let mut fields = line.split_whitespace();
    let rating: f64 = fields.next()?.parse().ok()?;
    let wins = fields.next()?.parse().ok()?;
    let losses = fields.next()?.parse().ok()?;
    rating.is_finite().then_some((rating, wins, losses))
}

/// The team file at a fixed path.
pub struct TeamStore {
    path: PathBuf,
}

impl TeamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the file and write every team.
    pub fn save(&self, teams: &[Team]) -> TourneyResult<()> {
        let file = File::create(&self.path)?;
        let mut out = BufWriter::new(file);
        write_teams(&mut out, teams)?;
        log::info!("saved {} teams to {}", teams.len(), self.path.display());
        Ok(())
    }

    /// `None` when the file does not exist.
    pub fn load(&self) -> TourneyResult<Option<Vec<Team>>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no team file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let teams = read_teams(BufReader::new(file))?;
        log::info!("loaded {} teams from {}", teams.len(), self.path.display());
        Ok(Some(teams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_two_line_records() {
        let input = "Falcons\n1200.5 3 1\nOtters\n950 0 2\n";
        let teams = read_teams(input.as_bytes()).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0], Team::new("Falcons", 1200.5).with_record(3, 1));
        assert_eq!(teams[1], Team::new("Otters", 950.0).with_record(0, 2));
    }

    #[test]
    fn stops_at_first_corrupt_record() {
        let input = "Falcons\n1200 3 1\nOtters\nnot-a-number 0 2\nBadgers\n800 1 1\n";
        let teams = read_teams(input.as_bytes()).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Falcons");
    }

    #[test]
    fn skips_blank_name_lines() {
        let input = "\nFalcons\n1200 3 1\n\n";
        let teams = read_teams(input.as_bytes()).unwrap();
        assert_eq!(teams.len(), 1);
    }

    #[test]
    fn missing_stats_line_keeps_earlier_teams() {
        let input = "Falcons\n1200 3 1\nOtters\n";
        let teams = read_teams(input.as_bytes()).unwrap();
        assert_eq!(teams.len(), 1);
    }

    #[test]
    fn invalid_utf8_name_keeps_earlier_teams() {
        let input: &[u8] = b"Falcons\n1200 3 1\nOtt\xffers\n950 0 2\n";
        let teams = read_teams(input).expect("bad bytes end the read, not fail it");
        assert_eq!(teams, vec![Team::new("Falcons", 1200.0).with_record(3, 1)]);
    }

    #[test]
    fn invalid_utf8_stats_keeps_earlier_teams() {
        let input: &[u8] = b"Falcons\n1200 3 1\nOtters\n95\xff 0 2\n";
        let teams = read_teams(input).expect("bad bytes end the read, not fail it");
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Falcons");
    }

    #[test]
    fn negative_record_is_corrupt() {
        let input = "Falcons\n1200 -1 0\n";
        assert!(read_teams(input.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn written_format_is_name_then_stats() {
        let mut buf = Vec::new();
        write_teams(&mut buf, &[Team::new("Falcons", 901.5).with_record(1, 0)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Falcons\n901.5 1 0\n");
    }
}
