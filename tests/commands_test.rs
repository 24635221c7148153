//! Integration tests for command handlers

use std::io::Write;

use fpl_watchlist::{
    commands::show::{build_view, ShowParams},
    core::sample_players,
    FilterCriterion, PlayerId, Position, SortKey, WatchlistError,
};
use tempfile::NamedTempFile;

fn write_watchlist(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn params(file: &NamedTempFile) -> ShowParams {
    ShowParams {
        file: Some(file.path().to_path_buf()),
        filter: FilterCriterion::All,
        sort: SortKey::Form,
        remove: vec![],
        as_json: false,
    }
}

#[test]
fn test_build_view_from_file() {
    let file = write_watchlist(&serde_json::to_string(&sample_players()).unwrap());
    let mut p = params(&file);
    p.filter = FilterCriterion::Only(Position::MID);

    let view = build_view(&p).unwrap();
    let names: Vec<_> = view.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cole Palmer", "Bruno Guimarães"]);
    assert_eq!(view.filter, FilterCriterion::Only(Position::MID));
    assert_eq!(view.next_scout, "07:23:45");
}

#[test]
fn test_build_view_applies_removals_before_insights() {
    let file = write_watchlist(&serde_json::to_string(&sample_players()).unwrap());
    let mut p = params(&file);
    p.remove = vec![PlayerId::new(1), PlayerId::new(99)];
    p.sort = SortKey::Price;

    let view = build_view(&p).unwrap();
    let ids: Vec<u64> = view.players.iter().map(|p| p.id.as_u64()).collect();
    assert_eq!(ids, vec![2, 4, 3]);
    assert_eq!(view.insights.likely_risers, vec!["Bruno Guimarães".to_string()]);
    assert_eq!(view.insights.in_form_count, 1);
    // (18 + 22 + 25) / 3 = 21.67
    assert_eq!(view.insights.average_expected_points, Some(22));
}

#[test]
fn test_build_view_rejects_duplicate_ids_in_file() {
    let mut players = sample_players();
    players[1].id = PlayerId::new(1);
    let file = write_watchlist(&serde_json::to_string(&players).unwrap());

    match build_view(&params(&file)) {
        Err(WatchlistError::DuplicatePlayer { id }) => assert_eq!(id, 1),
        other => panic!("Expected DuplicatePlayer, got {:?}", other.map(|v| v.players.len())),
    }
}

#[test]
fn test_build_view_rejects_malformed_file() {
    let file = write_watchlist("{ not json");
    assert!(matches!(
        build_view(&params(&file)),
        Err(WatchlistError::Json(_))
    ));
}

#[test]
fn test_view_json_shape() {
    let file = write_watchlist(&serde_json::to_string(&sample_players()).unwrap());
    let mut p = params(&file);
    p.sort = SortKey::AiScore;

    let view = build_view(&p).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["filter"], "ALL");
    assert_eq!(json["sort"], "ai");
    assert_eq!(json["players"][1]["name"], "Bruno Guimarães");
    assert_eq!(json["players"][0]["nextFixtures"][0], "bou (H)");
    assert_eq!(json["nextScout"], "07:23:45");
    assert_eq!(json["insights"]["likelyRisers"][0], "Cole Palmer");
}
