//! Move adjacency table: which moves may follow which.
//!
//! The table carries no pruning policy of its own. Whoever builds it decides
//! which continuations are worth exploring (no immediate repeats, canonical
//! order for parallel layers, ...); the enumerators only ever branch to the
//! moves listed in a row, in the order they are listed.

use smallvec::SmallVec;

use crate::moves::{Move, MOVE_COUNT};

/// Ordered successors of one move
pub type SuccessorRow = SmallVec<[Move; MOVE_COUNT]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveAdjacency {
    rows: [SuccessorRow; MOVE_COUNT],
    declared: [bool; MOVE_COUNT],
}

impl MoveAdjacency {
    /// Create an empty table (no roots, nothing declared)
    pub fn new() -> Self {
        Self::default()
    }

    /// Table where every listed move may follow every listed move,
    /// including itself, in the given order.
    pub fn fully_connected(moves: &[Move]) -> Self {
        let mut table = Self::new();
        for &mv in moves {
            table.set_row(mv, moves.iter().copied());
        }
        table
    }

    /// Declare `mv` and replace its successor row
    pub fn set_row<I>(&mut self, mv: Move, successors: I)
    where
        I: IntoIterator<Item = Move>,
    {
        let index = usize::from(mv.serial());
        self.rows[index] = successors.into_iter().collect();
        self.declared[index] = true;
    }

    pub fn with_row<I>(mut self, mv: Move, successors: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        self.set_row(mv, successors);
        self
    }

    pub fn successors(&self, mv: Move) -> &[Move] {
        &self.rows[usize::from(mv.serial())]
    }

    /// A move can start a sequence iff its row lists at least one continuation
    pub fn is_root(&self, mv: Move) -> bool {
        !self.successors(mv).is_empty()
    }

    /// Root moves in serial order
    pub fn roots(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.is_root(mv))
    }

    pub fn is_declared(&self, mv: Move) -> bool {
        self.declared[usize::from(mv.serial())]
    }

    /// Moves that head a row of the table, in serial order
    pub fn declared_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.is_declared(mv))
    }

    /// Highest serial of any move mentioned in the table, as a row header
    /// or as a successor.
    pub fn highest_serial(&self) -> Option<u8> {
        let headers = self.declared_moves();
        let successors = self.rows.iter().flat_map(|row| row.iter().copied());
        headers.chain(successors).map(Move::serial).max()
    }
}
