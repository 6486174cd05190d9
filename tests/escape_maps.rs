//! End-to-end walks over the sample maps in `maps/`.

use mine_escape::{
    Color, EscapeError, FailureReason, LoadError, Options, Outcome, escape_file, escape_verbose_with, load_file,
};
use std::path::PathBuf;

fn map_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("maps").join(name)
}

#[test]
fn gold_rush_collects_two_nuggets() {
    let out = escape_file(map_path("gold_rush.map"), &Options::default()).unwrap();
    assert_eq!(out, Outcome::Success { path: vec![0, 1, 2, 3, 4, 10, 11, 17], final_gold: 2 });
    assert_eq!(out.to_string(), "Path: 0 1 2 3 4 10 11 17 2G");
}

#[test]
fn locked_vault_uses_both_keys() {
    let grid = load_file(map_path("locked_vault.map")).unwrap();
    let details = escape_verbose_with(grid, &Options::default()).unwrap();

    assert_eq!(
        details.outcome,
        Outcome::Success { path: vec![0, 1, 2, 9, 16, 15, 14, 7, 17, 18, 19, 20, 11, 4, 5, 6], final_gold: 0 }
    );
    assert_eq!(details.live_path, vec![0, 1, 2, 9, 16, 17, 18, 11, 4, 5, 6]);
    assert_eq!(details.metrics.backtracks, 5);
    assert_eq!(details.metrics.doors_unlocked, 2);
    assert_eq!(details.ledger.keys(Color::Red), 0);
    assert_eq!(details.ledger.keys(Color::Blue), 0);
}

#[test]
fn sealed_mine_reports_no_solution() {
    let out = escape_file(map_path("sealed.map"), &Options::default()).unwrap();
    assert_eq!(out, Outcome::Failure { reason: FailureReason::NoSolution });
    assert_eq!(out.to_string(), "No solution found");
}

#[test]
fn sample_maps_are_deterministic() {
    for name in ["gold_rush.map", "locked_vault.map", "sealed.map"] {
        let a = escape_file(map_path(name), &Options::default()).unwrap();
        let b = escape_file(map_path(name), &Options::default()).unwrap();
        assert_eq!(a, b, "{name}");
    }
}

#[test]
fn missing_map_is_a_typed_error() {
    let err = escape_file(map_path("does_not_exist.map"), &Options::default()).unwrap_err();
    assert!(matches!(err, EscapeError::Load(LoadError::Io { .. })));
}
