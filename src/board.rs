use crate::cell::Cell;
use crate::coord::Coord;
use core::fmt;
use log::debug;
use ndarray::Array2;
use petgraph::unionfind::UnionFind;

/// [Board] holds the read-only cell grid together with its 4-connected components, kept in a
/// [UnionFind] over the row-major cell indices. Components are generated once on construction;
/// the board is never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Array2<Cell>,
    components: UnionFind<usize>,
}

impl Board {
    pub fn new(cells: Array2<Cell>) -> Board {
        let (rows, cols) = cells.dim();
        let mut board = Board {
            cells,
            components: UnionFind::new(rows * cols),
        };
        board.generate_components();
        board
    }

    /// Builds a board from rows of cells. Returns [None] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Board> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        let flat = rows.into_iter().flatten().collect::<Vec<Cell>>();
        Array2::from_shape_vec((n_rows, n_cols), flat)
            .ok()
            .map(Board::new)
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn get(&self, pos: Coord) -> Option<Cell> {
        self.cells.get((pos.row, pos.col)).copied()
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// A cell can be entered if it lies on the board and is not a wall. Ghost and Pacman markers
    /// do not block.
    pub fn can_move_to(&self, pos: Coord) -> bool {
        self.in_bounds(pos) && !self.cells[(pos.row, pos.col)].blocks()
    }

    fn get_ix(&self, pos: &Coord) -> usize {
        pos.row * self.cols() + pos.col
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, pos: &Coord) -> usize {
        self.components.find(self.get_ix(pos))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Positions off the board or on a
    /// wall are unreachable from everywhere.
    pub fn unreachable(&self, start: &Coord, goal: &Coord) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Links every open cell to its open right and lower neighbours, which covers all
    /// 4-adjacent pairs exactly once.
    fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} board",
            self.rows(),
            self.cols()
        );
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let pos = Coord::new(row, col);
                if !self.can_move_to(pos) {
                    continue;
                }
                let parent_ix = self.get_ix(&pos);
                for n in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                    if self.can_move_to(n) {
                        let ix = self.get_ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.rows() {
            let values = row.iter().map(|c| u8::from(*c)).collect::<Vec<u8>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |. # .|
        // |. # .|
        let board = Board::from_rows(vec![vec![Open, Wall, Open], vec![Open, Wall, Open]]).unwrap();
        let p1 = Coord::new(0, 0);
        let p2 = Coord::new(1, 0);
        let p3 = Coord::new(0, 2);
        let p4 = Coord::new(1, 2);
        assert!(board.reachable(&p1, &p2));
        assert!(board.reachable(&p3, &p4));
        assert!(board.unreachable(&p1, &p3));
        assert_ne!(board.get_component(&p2), board.get_component(&p4));
    }

    /// Asserts that diagonal contact does not connect two cells.
    #[test]
    fn no_diagonal_reachability() {
        //  __
        // |.#|
        // |#.|
        //  __
        let board = Board::from_rows(vec![vec![Pacman, Wall], vec![Wall, Ghost]]).unwrap();
        assert!(board.unreachable(&Coord::new(0, 0), &Coord::new(1, 1)));
    }

    #[test]
    fn markers_are_traversable() {
        // |P G .|
        let board = Board::from_rows(vec![vec![Pacman, Ghost, Open]]).unwrap();
        assert!(board.reachable(&Coord::new(0, 0), &Coord::new(0, 2)));
    }

    #[test]
    fn walls_and_out_of_bounds_are_unreachable() {
        let board = Board::from_rows(vec![vec![Open, Wall]]).unwrap();
        assert!(board.unreachable(&Coord::new(0, 0), &Coord::new(0, 1)));
        assert!(board.unreachable(&Coord::new(0, 0), &Coord::new(5, 5)));
        assert!(!board.can_move_to(Coord::new(1, 0)));
        assert!(!board.in_bounds(Coord::new(0, 2)));
        assert!(board.in_bounds(Coord::new(0, 1)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Board::from_rows(vec![vec![Open, Open], vec![Open]]).is_none());
    }

    #[test]
    fn display_prints_rows() {
        let board = Board::from_rows(vec![vec![Pacman, Wall], vec![Open, Ghost]]).unwrap();
        assert_eq!(board.to_string(), "[3, 1]\n[0, 2]\n");
    }
}
