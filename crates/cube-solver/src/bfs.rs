//! Breadth-first enumeration of solving move sequences.
//!
//! Paths are expanded level by level from a FIFO queue, so solutions come out
//! in non-decreasing length. A node whose state is solved is recorded and not
//! expanded further. Only the maximum depth bounds this walk: solutions shorter
//! than the configured minimum depth are still reported.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::goal::edge_phase_ok;
use crate::moves::Move;
use crate::path::PathCodec;
use crate::solver::{CubeProblem, SearchLimits, SearchStats, Solution};

/// A queued partial path
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    state: u32,
    /// Packed move serials, first move in the highest field
    path: u64,
    len: u8,
    last: Move,
}

/// Enumerate every solving sequence of at most `limits.max_depth` moves,
/// passing each one to `on_solution` as it is found.
pub fn enumerate<F>(problem: &CubeProblem, limits: &SearchLimits, mut on_solution: F) -> SearchStats
where
    F: FnMut(Solution),
{
    let goal = problem.goal();
    let codec = PathCodec::for_adjacency(&problem.adjacency);
    debug_assert!(
        codec.fits(limits.max_depth),
        "{} moves of {} bits overflow the path word",
        limits.max_depth,
        codec.field_width()
    );

    let mut stats = SearchStats::default();
    let mut queue: VecDeque<SearchNode> = problem
        .adjacency
        .roots()
        .map(|root| SearchNode {
            state: root.apply(problem.initial.state),
            path: u64::from(root.serial()),
            len: 1,
            last: root,
        })
        .collect();
    let mut level = 0;

    while let Some(node) = queue.pop_front() {
        if limits.expired() {
            warn!(
                depth = node.len,
                queued = queue.len(),
                "breadth-first search cancelled by deadline"
            );
            return stats;
        }
        stats.nodes_visited += 1;

        if goal.is_solved(node.state) {
            if !problem.track_edges
                || edge_phase_ok(problem.initial.edge_phase, codec.decode(node.path, node.len))
            {
                stats.solutions += 1;
                on_solution(Solution::new(codec.decode(node.path, node.len).collect()));
            }
            continue;
        }

        if node.len > level {
            level = node.len;
            debug!(depth = level, queued = queue.len(), "searching level");
        }

        if node.len < limits.max_depth {
            for &next in problem.adjacency.successors(node.last) {
                queue.push_back(SearchNode {
                    state: next.apply(node.state),
                    path: codec.push(node.path, next),
                    len: node.len + 1,
                    last: next,
                });
            }
        }
    }

    stats.exhausted = true;
    stats
}
