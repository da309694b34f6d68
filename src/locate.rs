use crate::board::Board;
use crate::cell::Cell;
use crate::coord::Coord;

/// Finds all coordinates of cells holding `value`, in row-major order.
pub fn find_coordinates(board: &Board, value: Cell) -> Vec<Coord> {
    board
        .cells()
        .indexed_iter()
        .filter(|(_, cell)| **cell == value)
        .map(|(ix, _)| Coord::from(ix))
        .collect()
}
