//! Packing slot tokens into the primary state and edge-phase register.

use crate::moves::Move;

pub const CORNER_SLOTS: usize = 8;
pub const EDGE_SLOTS: usize = 4;

/// A puzzle configuration: the packed primary state plus the edge-phase
/// register for the two middle-layer edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Configuration {
    pub state: u32,
    pub edge_phase: u8,
}

impl Configuration {
    pub fn new(state: u32, edge_phase: u8) -> Self {
        Self { state, edge_phase }
    }

    /// Build a configuration from raw slot tokens.
    ///
    /// `phase_bits` are the register bit positions of the two middle-layer
    /// edges and must each be below 8.
    pub fn from_slots(
        corners: &[u8; CORNER_SLOTS],
        edges: &[u8; EDGE_SLOTS],
        phase_bits: [u8; 2],
    ) -> Self {
        Self {
            state: pack_state(corners, edges),
            edge_phase: pack_edge_phase(phase_bits),
        }
    }

    /// Apply a move to both the primary state and the register
    pub fn apply(self, mv: Move) -> Self {
        Self {
            state: mv.apply(self.state),
            edge_phase: mv.apply_edge_phase(self.edge_phase),
        }
    }

    /// Apply a sequence of moves in order
    pub fn apply_all<I>(self, moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        moves.into_iter().fold(self, Configuration::apply)
    }
}

/// Pack corner tokens (3 bits each, corner 0 highest) followed by edge
/// tokens (2 bits each) into one word.
pub fn pack_state(corners: &[u8; CORNER_SLOTS], edges: &[u8; EDGE_SLOTS]) -> u32 {
    let state = corners
        .iter()
        .fold(0u32, |acc, &c| acc << 3 | u32::from(c & 0b111));
    edges
        .iter()
        .fold(state, |acc, &e| acc << 2 | u32::from(e & 0b11))
}

pub fn pack_edge_phase(phase_bits: [u8; 2]) -> u8 {
    debug_assert!(phase_bits.iter().all(|&b| b < 8));
    (1 << phase_bits[0]) | (1 << phase_bits[1])
}

pub fn corner_tokens(state: u32) -> [u8; CORNER_SLOTS] {
    let mut tokens = [0u8; CORNER_SLOTS];
    for (slot, token) in tokens.iter_mut().enumerate() {
        *token = (state >> (29 - 3 * slot) & 0b111) as u8;
    }
    tokens
}

pub fn edge_tokens(state: u32) -> [u8; EDGE_SLOTS] {
    let mut tokens = [0u8; EDGE_SLOTS];
    for (slot, token) in tokens.iter_mut().enumerate() {
        *token = (state >> (6 - 2 * slot) & 0b11) as u8;
    }
    tokens
}
