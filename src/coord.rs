use core::fmt;
use smallvec::SmallVec;

/// A 0-indexed (row, column) position on a [Board](crate::Board).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The up to four cardinal neighbours in the order up, down, left, right. Neighbours that
    /// would underflow are left out; the upper bounds are the board's concern.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coord; 4]> {
        let mut neighbours = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighbours.push(Coord::new(row, self.col));
        }
        neighbours.push(Coord::new(self.row + 1, self.col));
        if let Some(col) = self.col.checked_sub(1) {
            neighbours.push(Coord::new(self.row, col));
        }
        neighbours.push(Coord::new(self.row, self.col + 1));
        neighbours
    }

    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
