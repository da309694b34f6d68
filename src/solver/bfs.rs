use super::{distinct_targets, Distance, FxIndexMap, GridSolver};
use crate::board::Board;
use crate::coord::Coord;
use fxhash::FxHashSet;
use log::debug;
use std::collections::VecDeque;

/// Level-by-level search that stops as soon as every distinct target has a distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn distances(&self, board: &Board, start: Coord, targets: &[Coord]) -> Vec<(Coord, Distance)> {
        bfs_with_obstacles(board, start, targets)
    }
}

/// Breadth-first search over the four cardinal directions, where only walls block movement.
///
/// A dequeued cell is matched against the targets before the visited check, and the first
/// distance recorded for a target is kept. Returns one entry per distinct target in the order
/// the targets were first supplied; targets never dequeued are [Distance::Unreachable].
pub fn bfs_with_obstacles(
    board: &Board,
    start: Coord,
    targets: &[Coord],
) -> Vec<(Coord, Distance)> {
    let targets = distinct_targets(targets);
    if targets.is_empty() {
        return Vec::new();
    }
    debug_assert!(board.can_move_to(start), "start {start} is not an open cell");

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut queue: VecDeque<(Coord, u32)> = VecDeque::from([(start, 0)]);
    let mut distances: FxIndexMap<Coord, u32> = FxIndexMap::default();

    while let Some((pos, dist)) = queue.pop_front() {
        if targets.contains(&pos) {
            distances.entry(pos).or_insert(dist);
            if distances.len() == targets.len() {
                debug!(
                    "All {} targets found at depth {}, {} cells visited",
                    targets.len(),
                    dist,
                    visited.len()
                );
                break;
            }
        }

        if !visited.insert(pos) {
            continue;
        }

        for n in pos.neumann_neighborhood() {
            if board.can_move_to(n) && !visited.contains(&n) {
                queue.push_back((n, dist + 1));
            }
        }
    }

    if distances.len() < targets.len() {
        debug!(
            "Frontier exhausted with {} of {} targets found",
            distances.len(),
            targets.len()
        );
    }

    targets
        .into_iter()
        .map(|t| (t, Distance::from(distances.get(&t).copied())))
        .collect()
}
