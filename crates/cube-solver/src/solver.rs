//! Bounded move-sequence search for the 2x2x3 cube.
//!
//! Enumerates every move sequence allowed by a [`MoveAdjacency`] that takes
//! the initial configuration to a solved one, within a depth window. Either a
//! breadth-first or a depth-first walk can be used; both report the same set of
//! solutions when no minimum depth is set, differing only in order.
//!
//! Revisited configurations are not deduplicated: this is an enumeration of
//! sequences, not a shortest-path search.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::adjacency::MoveAdjacency;
use crate::goal::GoalTable;
use crate::moves::Move;
use crate::path::PathCodec;
use crate::state::Configuration;
use crate::{bfs, dfs};

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{name}` (expected bfs or dfs)")]
pub struct ParseAlgorithmError {
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("BFS"),
            Algorithm::Dfs => f.write_str("DFS"),
        }
    }
}

/// What to solve: the start configuration and the legal move graph
#[derive(Debug, Clone)]
pub struct CubeProblem {
    pub initial: Configuration,
    pub adjacency: MoveAdjacency,
    /// Compare edge slots and replay the edge-phase register. When false the
    /// edge bits are ignored entirely.
    pub track_edges: bool,
}

impl CubeProblem {
    pub fn new(initial: Configuration, adjacency: MoveAdjacency, track_edges: bool) -> Self {
        Self {
            initial,
            adjacency,
            track_edges,
        }
    }

    pub fn goal(&self) -> GoalTable {
        GoalTable::for_tracking(self.track_edges)
    }

    pub fn path_codec(&self) -> PathCodec {
        PathCodec::for_adjacency(&self.adjacency)
    }
}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    /// Shortest path accepted by depth-first search. Breadth-first search
    /// ignores it.
    pub min_depth: u8,
    pub max_depth: u8,
    /// Maximum time to search
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            min_depth: 0,
            max_depth: 8,
            timeout: None,
        }
    }
}

/// Depth window and deadline of a single run
#[derive(Debug, Clone)]
pub struct SearchLimits {
    pub min_depth: u8,
    pub max_depth: u8,
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    pub fn new(min_depth: u8, max_depth: u8) -> Self {
        Self {
            min_depth,
            max_depth,
            deadline: None,
        }
    }

    pub fn from_config(config: &SolverConfig, start: Instant) -> Self {
        Self {
            min_depth: config.min_depth,
            max_depth: config.max_depth,
            deadline: config.timeout.map(|timeout| start + timeout),
        }
    }

    pub fn expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Counters of one enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub solutions: usize,
    /// False if the walk stopped at the deadline
    pub exhausted: bool,
}

/// A solving move sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn serials(&self) -> Vec<u8> {
        self.moves.iter().map(|m| m.serial()).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub algorithm: Algorithm,
    /// Solutions in discovery order
    pub solutions: Vec<Solution>,
    /// Whether the search space was fully exhausted
    pub search_exhausted: bool,
    pub nodes_visited: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Run the configured enumeration, streaming each solution to `on_solution`.
pub fn solve_with<F>(problem: &CubeProblem, config: &SolverConfig, mut on_solution: F) -> SearchStats
where
    F: FnMut(Solution),
{
    let start_time = Instant::now();
    let limits = SearchLimits::from_config(config, start_time);
    let codec = problem.path_codec();

    info!(
        algorithm = %config.algorithm,
        min_depth = config.min_depth,
        max_depth = config.max_depth,
        track_edges = problem.track_edges,
        state = problem.initial.state,
        edge_phase = problem.initial.edge_phase,
        move_bits = codec.field_width(),
        move_mask = codec.mask(),
        "search started"
    );
    for mv in problem.adjacency.declared_moves() {
        let row: Vec<&str> = problem
            .adjacency
            .successors(mv)
            .iter()
            .map(|m| m.symbol())
            .collect();
        debug!(symbol = %mv, successors = %row.join(" "), "adjacency row");
    }

    let record = |solution: Solution| {
        debug!(length = solution.len(), steps = %solution, "solution found");
        on_solution(solution);
    };
    let stats = match config.algorithm {
        Algorithm::Bfs => bfs::enumerate(problem, &limits, record),
        Algorithm::Dfs => dfs::enumerate(problem, &limits, record),
    };

    info!(
        solutions = stats.solutions,
        nodes_visited = stats.nodes_visited,
        exhausted = stats.exhausted,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "search finished"
    );
    stats
}

/// Run the configured enumeration and collect every solution.
pub fn solve(problem: &CubeProblem, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();
    let mut solutions = Vec::new();
    let stats = solve_with(problem, config, |solution| solutions.push(solution));

    SolverResult {
        algorithm: config.algorithm,
        solutions,
        search_exhausted: stats.exhausted,
        nodes_visited: stats.nodes_visited,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::CANONICAL_STATES;

    fn scrambled_problem() -> CubeProblem {
        let solved = CANONICAL_STATES[4] as u32 & 0xffff_ff00;
        CubeProblem::new(
            Configuration::new(solved, 0).apply_all([Move::R, Move::U]),
            MoveAdjacency::fully_connected(&[Move::R, Move::U, Move::UPrime, Move::U2]),
            false,
        )
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert!("astar".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
    }

    #[test]
    fn test_solve_dispatches_both_algorithms() {
        let problem = scrambled_problem();
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let config = SolverConfig {
                algorithm,
                min_depth: 0,
                max_depth: 3,
                timeout: None,
            };
            let result = solve(&problem, &config);

            assert_eq!(result.algorithm, algorithm);
            assert!(result.search_exhausted);
            assert!(result.nodes_visited > 0);
            assert!(result
                .solutions
                .iter()
                .any(|s| s.moves == [Move::UPrime, Move::R]));
        }
    }

    #[test]
    fn test_zero_timeout_cancels_immediately() {
        let problem = scrambled_problem();
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let config = SolverConfig {
                algorithm,
                min_depth: 0,
                max_depth: 6,
                timeout: Some(Duration::ZERO),
            };
            let result = solve(&problem, &config);

            assert!(!result.search_exhausted);
            assert_eq!(result.nodes_visited, 0);
            assert!(result.solutions.is_empty());
        }
    }

    #[test]
    fn test_limits_expire_at_deadline() {
        let start = Instant::now();
        assert!(!SearchLimits::new(0, 4).expired());

        let config = SolverConfig {
            timeout: Some(Duration::ZERO),
            ..SolverConfig::default()
        };
        assert!(SearchLimits::from_config(&config, start).expired());

        let config = SolverConfig {
            timeout: Some(Duration::from_secs(3600)),
            ..SolverConfig::default()
        };
        assert!(!SearchLimits::from_config(&config, start).expired());
    }

    #[test]
    fn test_cancelled_search_keeps_found_solutions() {
        let solved = CANONICAL_STATES[7] as u32 & 0xffff_ff00;
        let problem = CubeProblem::new(
            Configuration::new(solved, 0),
            MoveAdjacency::fully_connected(&[
                Move::U,
                Move::UPrime,
                Move::U2,
                Move::D,
                Move::DPrime,
                Move::D2,
            ]),
            false,
        );

        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let config = SolverConfig {
                algorithm,
                min_depth: 0,
                max_depth: 4,
                timeout: Some(Duration::from_millis(50)),
            };
            let mut kept = Vec::new();
            let stats = solve_with(&problem, &config, |solution| {
                kept.push(solution);
                std::thread::sleep(Duration::from_millis(100));
            });

            assert!(!stats.exhausted, "{algorithm}");
            assert_eq!(stats.solutions, 1, "{algorithm}");
            assert_eq!(kept.len(), 1, "{algorithm}");
        }
    }

    #[test]
    fn test_solution_display() {
        let solution = Solution::new(vec![Move::UwPrime, Move::R, Move::D2]);
        assert_eq!(solution.to_string(), "Uw' R D2");
        assert_eq!(solution.serials(), vec![14, 0, 12]);
        assert_eq!(solution.len(), 3);
    }
}
