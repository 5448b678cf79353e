//! Goal oracle: is a configuration one of the solved representations?
//!
//! A solved cube has eight bit patterns, one per whole-puzzle rotation about
//! the vertical axis combined with the half-turn symmetry. They are kept
//! sorted ascending as signed values so membership needs at most two
//! comparisons.

use crate::moves::Move;

/// Solved primary states, signed, ascending
pub const CANONICAL_STATES: [i32; 8] = [
    -1622093511,
    -1277027762,
    -697023597,
    -87652124,
    87652123,
    697023596,
    1277027761,
    1622093510,
];

/// Register value with both tracked edges in their home slots
pub const SOLVED_EDGE_PHASE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTable {
    entries: [i32; 8],
}

impl GoalTable {
    /// Table comparing corners and edges
    pub fn full() -> Self {
        Self {
            entries: CANONICAL_STATES,
        }
    }

    /// Table comparing corners only; edge bits are cleared from every entry
    pub fn corners_only() -> Self {
        Self {
            entries: CANONICAL_STATES.map(|entry| entry & !0xff),
        }
    }

    pub fn for_tracking(track_edges: bool) -> Self {
        if track_edges {
            Self::full()
        } else {
            Self::corners_only()
        }
    }

    pub fn entries(&self) -> &[i32; 8] {
        &self.entries
    }

    /// Membership test by signed dispatch into one of four entry pairs.
    pub fn is_solved(&self, state: u32) -> bool {
        let value = state as i32;
        let t = &self.entries;

        if value > 0 {
            if value >= t[6] {
                value == t[6] || value == t[7]
            } else {
                value == t[4] || value == t[5]
            }
        } else if value >= t[2] {
            value == t[2] || value == t[3]
        } else {
            value == t[0] || value == t[1]
        }
    }
}

/// Check if a register value is the solved phase or one of its slice
/// rotations.
pub fn is_solved_edge_phase(phase: u8) -> bool {
    phase == SOLVED_EDGE_PHASE
        || phase == Move::E.apply_edge_phase(SOLVED_EDGE_PHASE)
        || phase == Move::EPrime.apply_edge_phase(SOLVED_EDGE_PHASE)
        || phase == Move::E2.apply_edge_phase(SOLVED_EDGE_PHASE)
}

/// Replay a move sequence against the register only and test the result.
pub fn edge_phase_ok<I>(initial: u8, path: I) -> bool
where
    I: IntoIterator<Item = Move>,
{
    let phase = path
        .into_iter()
        .fold(initial, |phase, mv| mv.apply_edge_phase(phase));
    is_solved_edge_phase(phase)
}
