use std::fs;
use std::path::{Path, PathBuf};

use cube_solver::moves::Move;
use cube_solver::settings::{SettingsError, SolveSettings};
use cube_solver::solver::{solve, Algorithm};

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("settings.json")
}

#[test]
fn test_sample_settings_solve_end_to_end() {
    let settings = SolveSettings::from_file(&sample_path()).unwrap();
    assert!(!settings.track_edges());
    assert_eq!(settings.timeout_secs, None);

    let (problem, mut config) = settings.build().unwrap();
    assert_eq!(config.algorithm, Algorithm::Bfs);
    assert_eq!(problem.adjacency.roots().count(), 6);
    assert_eq!(problem.path_codec().field_width(), 4);

    let bfs = solve(&problem, &config);
    config.algorithm = Algorithm::Dfs;
    let dfs = solve(&problem, &config);

    let mut bfs_solutions = bfs.solutions.clone();
    let mut dfs_solutions = dfs.solutions.clone();
    bfs_solutions.sort();
    dfs_solutions.sort();
    assert_eq!(bfs_solutions, dfs_solutions);

    assert!(bfs.solutions.iter().all(|s| s.len() == 2));
    assert!(bfs
        .solutions
        .iter()
        .any(|s| s.moves == [Move::D2, Move::D2]));
}

#[test]
fn test_timeout_is_read_from_file() {
    let mut json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sample_path()).unwrap()).unwrap();
    json["timeout_secs"] = serde_json::json!(30);
    json["algorithm"] = serde_json::json!("dfs");

    let settings = SolveSettings::from_json(&json.to_string()).unwrap();
    let config = settings.solver_config().unwrap();
    assert_eq!(config.algorithm, Algorithm::Dfs);
    assert_eq!(config.timeout.map(|t| t.as_secs()), Some(30));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-settings.json");
    let err = SolveSettings::from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_settings_round_trip_through_serde() {
    let settings = SolveSettings::from_file(&sample_path()).unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let reloaded = SolveSettings::from_json(&json).unwrap();

    assert_eq!(reloaded.moves_map, settings.moves_map);
    assert_eq!(reloaded.corners, settings.corners);
    assert!(!json.contains("timeout_secs"));
}
