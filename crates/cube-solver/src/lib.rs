//! Move-sequence enumerator for the 2x2x3 cube.
//!
//! This crate walks every move sequence permitted by a move adjacency table,
//! up to a depth limit, and reports the ones that bring a scrambled
//! configuration back to any of its solved representations. Breadth-first
//! and depth-first walks are both available.

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod goal;
pub mod moves;
pub mod path;
pub mod render;
pub mod settings;
pub mod solver;
pub mod state;

// Re-export main types
pub use adjacency::MoveAdjacency;
pub use goal::{edge_phase_ok, GoalTable, CANONICAL_STATES};
pub use moves::{Move, ParseMoveError, MOVE_COUNT};
pub use path::{PathCodec, PathStack};
pub use render::{render, CubeNet};
pub use settings::{SettingsError, SolveSettings};
pub use solver::{
    solve, solve_with, Algorithm, CubeProblem, SearchLimits, SearchStats, Solution, SolverConfig,
    SolverResult,
};
pub use state::Configuration;
