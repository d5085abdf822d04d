//! Team file persistence tests: round trip, missing and corrupt files,
//! and the state reset that load performs.

use std::path::PathBuf;
use tourney_core::{
    store::TeamStore, FixedDraw, LoadOutcome, SaveOutcome, Tournament, TourneyConfig,
};

// ── Test helpers ────────────────────────────────────────────────────────────

fn temp_path(label: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tourney-{label}-{}.txt",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn tournament() -> Tournament {
    Tournament::new(TourneyConfig::default_test()).expect("tournament")
}

fn tuples(t: &Tournament) -> Vec<(String, f64, u32, u32)> {
    let mut rows: Vec<_> = t
        .registry()
        .snapshot()
        .into_iter()
        .map(|team| (team.name, team.rating, team.wins, team.losses))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// save -> load into a fresh tournament reproduces every tuple exactly.
#[test]
fn save_then_load_round_trips() {
    let path = temp_path("round-trip");
    let store = TeamStore::new(&path);

    let mut original = tournament();
    let field = [("Falcons", 1000.1), ("Otters", 1234.567), ("Badgers", 0.3), ("Fox Den", 900.0)];
    for (name, rating) in field {
        original.register_team(name, rating).unwrap();
    }
    original.schedule();
    original.simulate(&mut FixedDraw(0.0));
    assert_eq!(original.save(&store).unwrap(), SaveOutcome::Saved { count: 4 });

    let mut restored = tournament();
    assert_eq!(restored.load(&store).unwrap(), LoadOutcome::Loaded { count: 4 });
    assert_eq!(tuples(&restored), tuples(&original));
    assert_eq!(restored.teams().len(), 4);
    assert_eq!(restored.graph().vertex_count(), 4);

    let _ = std::fs::remove_file(&path);
}

/// Load replaces current state and drops history.
#[test]
fn load_replaces_state_and_history() {
    let path = temp_path("replace");
    std::fs::write(&path, "Falcons\n1200 3 1\nOtters\n950 0 2\n").unwrap();
    let store = TeamStore::new(&path);

    let mut t = tournament();
    t.register_team("Stale", 10.0).unwrap();
    t.register_team("Older", 5.0).unwrap();
    t.schedule();
    t.simulate(&mut FixedDraw(0.0));
    t.register_team("Queued", 1.0).unwrap();

    assert_eq!(t.load(&store).unwrap(), LoadOutcome::Loaded { count: 2 });

    assert!(t.team("Stale").is_none(), "load replaces the registry");
    let roster: Vec<&str> = t.teams().iter().map(|team| team.name.as_str()).collect();
    assert_eq!(roster, vec!["Falcons", "Otters"]);
    assert_eq!(t.result_count(), 0);
    assert!(t.undo_stack().is_empty());
    assert!(t.match_queue().is_empty());
    assert_eq!(t.graph().edge_count(), 0);
    assert_eq!(t.graph().vertex_count(), 2);
    assert!(t.undo_last().is_none());

    let _ = std::fs::remove_file(&path);
}

/// A missing file is a no-op that keeps current teams.
#[test]
fn missing_file_keeps_state() {
    let store = TeamStore::new(temp_path("missing"));
    let mut t = tournament();
    t.register_team("Keep", 1.0).unwrap();

    assert_eq!(t.load(&store).unwrap(), LoadOutcome::NoFile);
    assert!(t.team("Keep").is_some());
}

/// Reading stops at the first corrupt record and keeps what came before.
#[test]
fn corrupt_record_truncates_load() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "Falcons\n1200 3 1\nOtters\nNaN? 0 2\nBadgers\n800 1 1\n").unwrap();

    let mut t = tournament();
    assert_eq!(t.load(&TeamStore::new(&path)).unwrap(), LoadOutcome::Loaded { count: 1 });
    assert!(t.team("Falcons").is_some());
    assert!(t.team("Badgers").is_none());

    let _ = std::fs::remove_file(&path);
}

/// Bytes that are not UTF-8 end the read like any other corrupt record.
#[test]
fn non_utf8_record_keeps_earlier_teams() {
    let path = temp_path("non-utf8");
    std::fs::write(&path, b"Falcons\n1200 3 1\nOtt\xffers\n950 0 2\n").unwrap();

    let mut t = tournament();
    let loaded = t.load(&TeamStore::new(&path)).expect("load keeps the readable prefix");
    assert_eq!(loaded, LoadOutcome::Loaded { count: 1 });
    assert_eq!(t.team("Falcons").map(|team| team.wins), Some(3));
    assert_eq!(t.team_count(), 1);
    assert_eq!(t.teams().len(), t.team_count(), "roster and registry agree");

    let _ = std::fs::remove_file(&path);
}

/// Saving with no teams writes nothing.
#[test]
fn save_with_no_teams_is_a_no_op() {
    let path = temp_path("empty-save");
    let mut t = tournament();

    assert_eq!(t.save(&TeamStore::new(&path)).unwrap(), SaveOutcome::NothingToSave);
    assert!(!path.exists());
}

/// A file listing a team twice keeps the later record and one roster entry.
#[test]
fn duplicate_file_entries_collapse() {
    let path = temp_path("dupes");
    std::fs::write(&path, "Falcons\n1200 3 1\nFalcons\n1300 4 1\n").unwrap();

    let mut t = tournament();
    assert_eq!(t.load(&TeamStore::new(&path)).unwrap(), LoadOutcome::Loaded { count: 1 });
    assert_eq!(t.teams().len(), 1);
    assert_eq!(t.team("Falcons").unwrap().rating, 1300.0);

    let _ = std::fs::remove_file(&path);
}

/// Saving into a directory that does not exist reports an I/O error.
#[test]
fn unwritable_path_is_an_error() {
    let path = std::env::temp_dir()
        .join(format!("tourney-no-such-dir-{}", std::process::id()))
        .join("teams.txt");
    let mut t = tournament();
    t.register_team("Falcons", 1.0).unwrap();

    assert!(t.save(&TeamStore::new(path)).is_err());
    assert!(t.team("Falcons").is_some());
}
