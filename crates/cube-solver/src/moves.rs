//! The 19 turns of the 2x2x3 cube as pure bit transforms.
//!
//! The primary state packs eight 3-bit corner tokens into bits 31..8
//! (corner 0 in the highest slot) and four 2-bit edge tokens into bits 7..0
//! (edge 0 in the highest slot). Every transform moves whole tokens between
//! slots; a token's bits are never split.
//!
//! Seven turns also act on the 8-bit edge-phase register, which tracks the
//! two middle-layer edges that the primary state has no room for.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Number of distinct moves in the alphabet
pub const MOVE_COUNT: usize = 19;

const CORNER_MASK: u32 = 0b111;
const EDGE_MASK: u32 = 0b11;

/// A single turn of the puzzle. The discriminant is the move's serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Move {
    R,
    L,
    F,
    B,
    U,
    UPrime,
    U2,
    E,
    EPrime,
    E2,
    D,
    DPrime,
    D2,
    Uw,
    UwPrime,
    Uw2,
    Dw,
    DwPrime,
    Dw2,
}

/// Error returned when a move symbol is not part of the alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move symbol `{symbol}`")]
pub struct ParseMoveError {
    pub symbol: String,
}

impl Move {
    /// All moves, indexed by serial
    pub const ALL: [Move; MOVE_COUNT] = [
        Move::R,
        Move::L,
        Move::F,
        Move::B,
        Move::U,
        Move::UPrime,
        Move::U2,
        Move::E,
        Move::EPrime,
        Move::E2,
        Move::D,
        Move::DPrime,
        Move::D2,
        Move::Uw,
        Move::UwPrime,
        Move::Uw2,
        Move::Dw,
        Move::DwPrime,
        Move::Dw2,
    ];

    pub fn serial(self) -> u8 {
        self as u8
    }

    pub fn from_serial(serial: u8) -> Option<Move> {
        Self::ALL.get(usize::from(serial)).copied()
    }

    /// Display symbol in standard cube notation
    pub fn symbol(self) -> &'static str {
        match self {
            Move::R => "R",
            Move::L => "L",
            Move::F => "F",
            Move::B => "B",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::U2 => "U2",
            Move::E => "E",
            Move::EPrime => "E'",
            Move::E2 => "E2",
            Move::D => "D",
            Move::DPrime => "D'",
            Move::D2 => "D2",
            Move::Uw => "Uw",
            Move::UwPrime => "Uw'",
            Move::Uw2 => "Uw2",
            Move::Dw => "Dw",
            Move::DwPrime => "Dw'",
            Move::Dw2 => "Dw2",
        }
    }

    /// The move that undoes this one.
    ///
    /// R, L, F and B are half turns on this puzzle and are their own inverse.
    pub fn inverse(self) -> Move {
        match self {
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
            Move::E => Move::EPrime,
            Move::EPrime => Move::E,
            Move::D => Move::DPrime,
            Move::DPrime => Move::D,
            Move::Uw => Move::UwPrime,
            Move::UwPrime => Move::Uw,
            Move::Dw => Move::DwPrime,
            Move::DwPrime => Move::Dw,
            other => other,
        }
    }

    /// Check if this is a quarter turn (order 4)
    pub fn is_quarter_turn(self) -> bool {
        matches!(
            self,
            Move::U
                | Move::UPrime
                | Move::E
                | Move::EPrime
                | Move::D
                | Move::DPrime
                | Move::Uw
                | Move::UwPrime
                | Move::Dw
                | Move::DwPrime
        )
    }

    /// Apply this move to a primary state
    pub fn apply(self, state: u32) -> u32 {
        match self {
            // corners: 0123 4567 => 0176 4532, edges: 0123 => 0132
            Move::R => half_turn(state, [(2, 7), (3, 6)], (2, 3)),
            // corners: 0123 4567 => 5423 1067, edges: 0123 => 1023
            Move::L => half_turn(state, [(0, 5), (1, 4)], (0, 1)),
            // corners: 0123 4567 => 7124 3560, edges: 0123 => 3120
            Move::F => half_turn(state, [(0, 7), (3, 4)], (0, 3)),
            // corners: 0123 4567 => 0653 4217, edges: 0123 => 0213
            Move::B => half_turn(state, [(1, 6), (2, 5)], (1, 2)),
            Move::U => upper_layer(state, 3),
            Move::UPrime => upper_layer(state, 9),
            Move::U2 => upper_layer(state, 6),
            Move::E => middle_layer(state, 2),
            Move::EPrime => middle_layer(state, 6),
            Move::E2 => middle_layer(state, 4),
            Move::D => lower_layer(state, 9),
            Move::DPrime => lower_layer(state, 3),
            Move::D2 => lower_layer(state, 6),
            Move::Uw => middle_layer(upper_layer(state, 3), 2),
            Move::UwPrime => middle_layer(upper_layer(state, 9), 6),
            Move::Uw2 => middle_layer(upper_layer(state, 6), 4),
            Move::Dw => middle_layer(lower_layer(state, 9), 6),
            Move::DwPrime => middle_layer(lower_layer(state, 3), 2),
            Move::Dw2 => middle_layer(lower_layer(state, 6), 4),
        }
    }

    /// Apply this move to the edge-phase register.
    ///
    /// Wide turns carry the middle slice with them. U and D turns do not
    /// touch the tracked edges and leave the register unchanged.
    pub fn apply_edge_phase(self, phase: u8) -> u8 {
        match self {
            Move::R => swap_bits(swap_bits(phase, 6, 7), 5, 0),
            Move::L => swap_bits(swap_bits(phase, 2, 3), 1, 4),
            Move::F => swap_bits(swap_bits(phase, 0, 1), 2, 7),
            Move::B => swap_bits(swap_bits(phase, 4, 5), 3, 6),
            Move::E | Move::Uw | Move::DwPrime => phase.rotate_left(2),
            Move::EPrime | Move::UwPrime | Move::Dw => phase.rotate_right(2),
            Move::E2 | Move::Uw2 | Move::Dw2 => phase.rotate_left(4),
            Move::U | Move::UPrime | Move::U2 | Move::D | Move::DPrime | Move::D2 => phase,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.symbol() == s)
            .ok_or_else(|| ParseMoveError {
                symbol: s.to_string(),
            })
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Exchange bits `m` and `n` of `x` if they differ.
pub fn swap_bits(x: u8, m: u8, n: u8) -> u8 {
    let bit_m = (x >> m) & 1;
    let bit_n = (x >> n) & 1;

    if bit_m != bit_n {
        x ^ ((1 << m) | (1 << n))
    } else {
        x
    }
}

fn corner_shift(slot: u32) -> u32 {
    29 - 3 * slot
}

fn edge_shift(slot: u32) -> u32 {
    6 - 2 * slot
}

fn swap_slots(state: u32, a_shift: u32, b_shift: u32, mask: u32) -> u32 {
    let a = state >> a_shift & mask;
    let b = state >> b_shift & mask;
    let cleared = state & !(mask << a_shift | mask << b_shift);
    cleared | b << a_shift | a << b_shift
}

/// Two corner transpositions plus one edge transposition
fn half_turn(state: u32, corners: [(u32, u32); 2], edges: (u32, u32)) -> u32 {
    let state = corners.iter().fold(state, |s, &(a, b)| {
        swap_slots(s, corner_shift(a), corner_shift(b), CORNER_MASK)
    });
    swap_slots(state, edge_shift(edges.0), edge_shift(edges.1), EDGE_MASK)
}

/// Rotate a 12-bit group of four corner tokens right by `bits`
fn rotate_corners(group: u32, bits: u32) -> u32 {
    (group >> bits | group << (12 - bits)) & 0xfff
}

fn upper_layer(state: u32, bits: u32) -> u32 {
    (state & 0x000f_ffff) | rotate_corners(state >> 20, bits) << 20
}

fn lower_layer(state: u32, bits: u32) -> u32 {
    (state & !(0xfff << 8)) | rotate_corners(state >> 8 & 0xfff, bits) << 8
}

fn middle_layer(state: u32, bits: u32) -> u32 {
    (state & 0xffff_ff00) | u32::from((state as u8).rotate_right(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{corner_tokens, edge_tokens, pack_state};

    const IDENTITY_CORNERS: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
    const IDENTITY_EDGES: [u8; 4] = [0, 1, 2, 3];

    fn identity() -> u32 {
        pack_state(&IDENTITY_CORNERS, &IDENTITY_EDGES)
    }

    #[test]
    fn test_symbols_round_trip() {
        for mv in Move::ALL {
            assert_eq!(mv.symbol().parse::<Move>(), Ok(mv));
            assert_eq!(Move::from_serial(mv.serial()), Some(mv));
        }
        assert_eq!(Move::from_serial(19), None);
        assert!("NaN".parse::<Move>().is_err());
    }

    #[test]
    fn test_half_turn_slot_layout() {
        let cases = [
            (Move::R, [0, 1, 7, 6, 4, 5, 3, 2], [0, 1, 3, 2]),
            (Move::L, [5, 4, 2, 3, 1, 0, 6, 7], [1, 0, 2, 3]),
            (Move::F, [7, 1, 2, 4, 3, 5, 6, 0], [3, 1, 2, 0]),
            (Move::B, [0, 6, 5, 3, 4, 2, 1, 7], [0, 2, 1, 3]),
        ];

        for (mv, corners, edges) in cases {
            let state = mv.apply(identity());
            assert_eq!(corner_tokens(state), corners, "{mv}");
            assert_eq!(edge_tokens(state), edges, "{mv}");
        }
    }

    #[test]
    fn test_layer_turn_slot_layout() {
        let u = Move::U.apply(identity());
        assert_eq!(corner_tokens(u), [3, 0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(edge_tokens(u), IDENTITY_EDGES);

        let d = Move::D.apply(identity());
        assert_eq!(corner_tokens(d), [0, 1, 2, 3, 5, 6, 7, 4]);

        let e = Move::E.apply(identity());
        assert_eq!(corner_tokens(e), IDENTITY_CORNERS);
        assert_eq!(edge_tokens(e), [3, 0, 1, 2]);

        let uw = Move::Uw.apply(identity());
        assert_eq!(corner_tokens(uw), [3, 0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(edge_tokens(uw), [3, 0, 1, 2]);

        let dw = Move::Dw.apply(identity());
        assert_eq!(corner_tokens(dw), [0, 1, 2, 3, 5, 6, 7, 4]);
        assert_eq!(edge_tokens(dw), [1, 2, 3, 0]);
    }

    #[test]
    fn test_inverse_undoes_move() {
        let states = [identity(), 0xdead_beef, 0x1234_5678, u32::MAX, 0];
        for mv in Move::ALL {
            for state in states {
                assert_eq!(mv.inverse().apply(mv.apply(state)), state, "{mv}");
                let phase = state as u8;
                assert_eq!(
                    mv.inverse().apply_edge_phase(mv.apply_edge_phase(phase)),
                    phase,
                    "{mv}"
                );
            }
        }
    }

    #[test]
    fn test_swap_bits() {
        assert_eq!(swap_bits(0b0000_0001, 0, 1), 0b0000_0010);
        assert_eq!(swap_bits(0b0000_0011, 0, 1), 0b0000_0011);
        assert_eq!(swap_bits(0b1000_0000, 7, 2), 0b0000_0100);
        assert_eq!(swap_bits(0, 3, 5), 0);
    }

    #[test]
    fn test_edge_phase_register_family() {
        assert_eq!(Move::E.apply_edge_phase(3), 12);
        assert_eq!(Move::EPrime.apply_edge_phase(3), 0b1100_0000);
        assert_eq!(Move::E2.apply_edge_phase(3), 0b0011_0000);
        assert_eq!(Move::F.apply_edge_phase(0b0000_0001), 0b0000_0010);
        assert_eq!(Move::R.apply_edge_phase(0b0000_0001), 0b0010_0000);

        for mv in [Move::U, Move::UPrime, Move::U2, Move::D, Move::DPrime, Move::D2] {
            assert_eq!(mv.apply_edge_phase(0b1010_0110), 0b1010_0110);
        }
    }
}
