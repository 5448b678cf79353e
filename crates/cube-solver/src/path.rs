//! Move-sequence storage for the two enumerators.
//!
//! Breadth-first search keeps millions of partial paths alive at once, so each
//! path is packed into a single `u64` of fixed-width serial fields (first move
//! in the highest field). Depth-first search only ever needs the current path
//! and keeps it on a [`PathStack`].

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::adjacency::MoveAdjacency;
use crate::moves::Move;

/// Width of the packed path word
pub const PATH_BITS: u32 = u64::BITS;

/// Fixed-width bit-field codec for move paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCodec {
    field_width: u32,
}

impl PathCodec {
    /// Smallest field that can hold `highest` (never narrower than one bit)
    pub fn for_highest_serial(highest: u8) -> Self {
        let needed = u8::BITS - highest.leading_zeros();
        Self {
            field_width: needed.max(1),
        }
    }

    pub fn for_adjacency(adjacency: &MoveAdjacency) -> Self {
        Self::for_highest_serial(adjacency.highest_serial().unwrap_or(0))
    }

    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    pub fn mask(&self) -> u64 {
        (1 << self.field_width) - 1
    }

    /// Longest path that fits in one word
    pub fn max_depth(&self) -> u32 {
        PATH_BITS / self.field_width
    }

    pub fn fits(&self, depth: u8) -> bool {
        u32::from(depth) * self.field_width <= PATH_BITS
    }

    /// Append a move to an encoded path
    pub fn push(&self, encoded: u64, mv: Move) -> u64 {
        encoded << self.field_width | u64::from(mv.serial())
    }

    pub fn encode(&self, moves: &[Move]) -> u64 {
        moves.iter().fold(0, |encoded, &mv| self.push(encoded, mv))
    }

    /// Move at `index` of a path of `len` moves
    pub fn get(&self, encoded: u64, len: u8, index: u8) -> Option<Move> {
        if index >= len {
            return None;
        }
        let shift = self.field_width * u32::from(len - 1 - index);
        let serial = (encoded >> shift) & self.mask();
        Move::from_serial(serial as u8)
    }

    /// Moves of a path of `len` moves, first to last
    pub fn decode(&self, encoded: u64, len: u8) -> impl Iterator<Item = Move> {
        let codec = *self;
        (0..len).filter_map(move |index| codec.get(encoded, len, index))
    }
}

/// The current path of a depth-first walk.
///
/// Moves are only pushed through [`PathStack::push_scoped`], whose guard pops
/// the move again when it goes out of scope, whichever way the scope is left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    moves: SmallVec<[Move; 32]>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: Move) -> Self {
        let mut moves = SmallVec::new();
        moves.push(root);
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Push `mv` for the lifetime of the returned guard
    pub fn push_scoped(&mut self, mv: Move) -> ScopedMove<'_> {
        self.moves.push(mv);
        ScopedMove { stack: self }
    }
}

/// Guard returned by [`PathStack::push_scoped`]
pub struct ScopedMove<'a> {
    stack: &'a mut PathStack,
}

impl Deref for ScopedMove<'_> {
    type Target = PathStack;

    fn deref(&self) -> &PathStack {
        self.stack
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut PathStack {
        self.stack
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.stack.moves.pop();
    }
}
