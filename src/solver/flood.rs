use super::{distinct_targets, Distance, GridSolver};
use crate::board::Board;
use crate::coord::Coord;
use ndarray::Array2;
use std::collections::VecDeque;

/// Floods the whole reachable area before answering; never stops early.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodSolver;

impl GridSolver for FloodSolver {
    fn distances(&self, board: &Board, start: Coord, targets: &[Coord]) -> Vec<(Coord, Distance)> {
        let field = distance_field(board, start);
        distinct_targets(targets)
            .into_iter()
            .map(|t| (t, Distance::from(field.get((t.row, t.col)).copied().flatten())))
            .collect()
    }
}

/// Distance from `start` to every cell of the board, [None] for walls and cells cut off from the
/// start.
pub fn distance_field(board: &Board, start: Coord) -> Array2<Option<u32>> {
    let mut field = Array2::from_elem((board.rows(), board.cols()), None);
    if !board.can_move_to(start) {
        return field;
    }
    field[(start.row, start.col)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        let next = field[(pos.row, pos.col)].map_or(0, |d| d + 1);
        for n in pos.neumann_neighborhood() {
            if board.can_move_to(n) && field[(n.row, n.col)].is_none() {
                field[(n.row, n.col)] = Some(next);
                queue.push_back(n);
            }
        }
    }
    field
}
