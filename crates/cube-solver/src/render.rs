//! Text net of a primary state, for eyeballing scrambles and results.
//!
//! The cube is drawn as three 2x2 layers from top to bottom: the upper
//! corners, the middle edges, then the lower corners. Each piece is written as
//! its sticker colours.

use std::fmt;

use crate::state::{corner_tokens, edge_tokens};

/// Sticker colours of each corner token
pub const CORNER_COLOURS: [&str; 8] = ["YBO", "YOG", "YGR", "YRB", "WOB", "WGO", "WRG", "WBR"];

/// Sticker colours of each edge token
pub const EDGE_COLOURS: [&str; 4] = ["BO", "GO", "GR", "BR"];

/// (row, column) of slot `i % 4` within its layer
const SLOT_CELLS: [(usize, usize); 4] = [(1, 0), (0, 0), (0, 1), (1, 1)];

type Layer = [[&'static str; 2]; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeNet {
    layers: [Layer; 3],
}

impl CubeNet {
    pub fn from_state(state: u32) -> Self {
        let mut layers: [Layer; 3] = [[[""; 2]; 2]; 3];

        for (slot, &token) in corner_tokens(state).iter().enumerate() {
            let layer = if slot < 4 { 0 } else { 2 };
            let (row, col) = SLOT_CELLS[slot % 4];
            layers[layer][row][col] = CORNER_COLOURS[usize::from(token)];
        }
        for (slot, &token) in edge_tokens(state).iter().enumerate() {
            let (row, col) = SLOT_CELLS[slot];
            layers[1][row][col] = EDGE_COLOURS[usize::from(token)];
        }

        Self { layers }
    }

    /// Piece at `(layer, row, col)`
    pub fn cell(&self, layer: usize, row: usize, col: usize) -> &'static str {
        self.layers[layer][row][col]
    }
}

impl fmt::Display for CubeNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for row in layer {
                writeln!(f, "{} {}", row[0], row[1])?;
            }
        }
        Ok(())
    }
}

pub fn render(state: u32) -> String {
    CubeNet::from_state(state).to_string()
}
