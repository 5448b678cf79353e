//! Depth-first enumeration of solving move sequences.
//!
//! Each root move starts a recursive walk that keeps the current path on a
//! [`PathStack`]. Unlike the breadth-first walk, a solved state is only
//! accepted once the path has reached the minimum depth; shallower solved
//! states are expanded like any other node.

use tracing::warn;

use crate::goal::{edge_phase_ok, GoalTable};
use crate::path::PathStack;
use crate::solver::{CubeProblem, SearchLimits, SearchStats, Solution};

/// The deadline passed mid-walk
#[derive(Debug)]
struct Cancelled;

struct Walk<'a, F> {
    problem: &'a CubeProblem,
    limits: &'a SearchLimits,
    goal: GoalTable,
    on_solution: F,
    stats: SearchStats,
}

impl<F> Walk<'_, F>
where
    F: FnMut(Solution),
{
    fn visit(&mut self, state: u32, path: &mut PathStack) -> Result<(), Cancelled> {
        if self.limits.expired() {
            return Err(Cancelled);
        }
        self.stats.nodes_visited += 1;

        let depth = path.len();
        if depth >= usize::from(self.limits.min_depth) && self.goal.is_solved(state) {
            if !self.problem.track_edges
                || edge_phase_ok(self.problem.initial.edge_phase, path.moves().iter().copied())
            {
                self.stats.solutions += 1;
                (self.on_solution)(Solution::new(path.moves().to_vec()));
            }
            return Ok(());
        }

        if depth >= usize::from(self.limits.max_depth) {
            return Ok(());
        }

        let Some(last) = path.last() else {
            return Ok(());
        };
        let problem = self.problem;
        for &next in problem.adjacency.successors(last) {
            let mut scoped = path.push_scoped(next);
            self.visit(next.apply(state), &mut scoped)?;
        }

        Ok(())
    }
}

/// Enumerate every solving sequence between `limits.min_depth` and
/// `limits.max_depth` moves, passing each one to `on_solution` as it is found.
pub fn enumerate<F>(problem: &CubeProblem, limits: &SearchLimits, on_solution: F) -> SearchStats
where
    F: FnMut(Solution),
{
    let mut walk = Walk {
        problem,
        limits,
        goal: problem.goal(),
        on_solution,
        stats: SearchStats::default(),
    };

    for root in problem.adjacency.roots() {
        let mut path = PathStack::with_root(root);
        if walk.visit(root.apply(problem.initial.state), &mut path).is_err() {
            warn!(root = %root, "depth-first search cancelled by deadline");
            return walk.stats;
        }
    }

    walk.stats.exhausted = true;
    walk.stats
}
