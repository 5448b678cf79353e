//! Solver settings as read from a JSON file.
//!
//! ```json
//! {
//!   "algorithm": "bfs",
//!   "min_depth": 0,
//!   "max_depth": 6,
//!   "corners": [3, 0, 1, 2, 7, 4, 5, 6],
//!   "edges": [0, 0, 0, 0, 0, 0],
//!   "moves_map": [["R", "U", "U'"], ["NaN"], ...]
//! }
//! ```
//!
//! Row `i` of `moves_map` starts with the symbol of the move with serial `i`
//! and lists the moves allowed to follow it. `"NaN"` ends a row early; a row
//! headed by `"NaN"` declares nothing.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjacency::MoveAdjacency;
use crate::moves::{Move, ParseMoveError, MOVE_COUNT};
use crate::path::PathCodec;
use crate::solver::{Algorithm, CubeProblem, ParseAlgorithmError, SolverConfig};
use crate::state::{Configuration, CORNER_SLOTS, EDGE_SLOTS};

/// Marks the end of a `moves_map` row
pub const ROW_TERMINATOR: &str = "NaN";

/// Error type for loading and validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corners[{index}] = {value} is not a corner token (0..8)")]
    CornerOutOfRange { index: usize, value: u8 },
    #[error("edges[{index}] = {value} is not an edge token (0..4)")]
    EdgeOutOfRange { index: usize, value: u8 },
    #[error("edges[{index}] = {value} is not a register bit (0..8)")]
    PhaseBitOutOfRange { index: usize, value: u8 },
    #[error("moves_map has {0} rows, at most {MOVE_COUNT} allowed")]
    TooManyRows(usize),
    #[error("moves_map row {row} is headed by `{found}`, expected `{expected}`")]
    RowHeaderMismatch {
        row: usize,
        found: Move,
        expected: String,
    },
    #[error(transparent)]
    UnknownMove(#[from] ParseMoveError),
    #[error(transparent)]
    UnknownAlgorithm(#[from] ParseAlgorithmError),
    #[error("min_depth {min} is greater than max_depth {max}")]
    DepthWindow { min: u8, max: u8 },
    #[error("max_depth {depth} needs {needed} path bits with {width}-bit moves, only 64 available")]
    PathOverflow { depth: u8, width: u32, needed: u32 },
}

/// The settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveSettings {
    pub max_depth: u8,
    pub min_depth: u8,
    pub corners: [u8; CORNER_SLOTS],
    /// Four edge slot tokens followed by the register bit positions of the
    /// two middle-layer edges
    pub edges: [u8; EDGE_SLOTS + 2],
    pub moves_map: Vec<Vec<String>>,
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SolveSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Edges are tracked unless every edge input is zero
    pub fn track_edges(&self) -> bool {
        self.edges.iter().any(|&e| e != 0)
    }

    pub fn configuration(&self) -> Result<Configuration, SettingsError> {
        for (index, &value) in self.corners.iter().enumerate() {
            if value >= 8 {
                return Err(SettingsError::CornerOutOfRange { index, value });
            }
        }

        let mut edges = [0u8; EDGE_SLOTS];
        for (index, &value) in self.edges.iter().enumerate() {
            if index < EDGE_SLOTS {
                if value >= 4 {
                    return Err(SettingsError::EdgeOutOfRange { index, value });
                }
                edges[index] = value;
            } else if value >= 8 {
                return Err(SettingsError::PhaseBitOutOfRange { index, value });
            }
        }

        let phase_bits = [self.edges[EDGE_SLOTS], self.edges[EDGE_SLOTS + 1]];
        Ok(Configuration::from_slots(&self.corners, &edges, phase_bits))
    }

    pub fn adjacency(&self) -> Result<MoveAdjacency, SettingsError> {
        if self.moves_map.len() > MOVE_COUNT {
            return Err(SettingsError::TooManyRows(self.moves_map.len()));
        }

        let mut adjacency = MoveAdjacency::new();
        for (row, symbols) in self.moves_map.iter().enumerate() {
            let mut symbols = symbols
                .iter()
                .map(String::as_str)
                .take_while(|&s| s != ROW_TERMINATOR);

            let Some(header) = symbols.next() else {
                continue;
            };
            let mv: Move = header.parse()?;
            if usize::from(mv.serial()) != row {
                return Err(SettingsError::RowHeaderMismatch {
                    row,
                    found: mv,
                    expected: Move::ALL[row].symbol().to_string(),
                });
            }

            let successors = symbols
                .map(str::parse::<Move>)
                .collect::<Result<Vec<_>, _>>()?;
            adjacency.set_row(mv, successors);
        }

        Ok(adjacency)
    }

    pub fn algorithm(&self) -> Result<Algorithm, SettingsError> {
        Ok(self.algorithm.parse()?)
    }

    pub fn solver_config(&self) -> Result<SolverConfig, SettingsError> {
        Ok(SolverConfig {
            algorithm: self.algorithm()?,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            timeout: self.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Validate everything and build the solver inputs
    pub fn build(&self) -> Result<(CubeProblem, SolverConfig), SettingsError> {
        let problem = CubeProblem::new(self.configuration()?, self.adjacency()?, self.track_edges());
        let config = self.solver_config()?;
        validate(&problem, &config)?;
        Ok((problem, config))
    }
}

/// Check the depth window, and that breadth-first paths fit the path word
pub fn validate(problem: &CubeProblem, config: &SolverConfig) -> Result<(), SettingsError> {
    if config.min_depth > config.max_depth {
        return Err(SettingsError::DepthWindow {
            min: config.min_depth,
            max: config.max_depth,
        });
    }

    let codec = PathCodec::for_adjacency(&problem.adjacency);
    if config.algorithm == Algorithm::Bfs && !codec.fits(config.max_depth) {
        return Err(SettingsError::PathOverflow {
            depth: config.max_depth,
            width: codec.field_width(),
            needed: u32::from(config.max_depth) * codec.field_width(),
        });
    }

    Ok(())
}
