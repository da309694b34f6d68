use crate::board::Board;
use crate::coord::Coord;
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

pub mod bfs;
pub mod flood;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Number of cell-steps from the start to a target, or [Distance::Unreachable] if the target was
/// never dequeued before the frontier emptied. The derived ordering puts every
/// [Distance::Steps] before [Distance::Unreachable].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Steps(u32),
    Unreachable,
}

impl Distance {
    pub fn steps(self) -> Option<u32> {
        match self {
            Distance::Steps(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Steps(_))
    }
}

impl From<Option<u32>> for Distance {
    fn from(d: Option<u32>) -> Self {
        d.map_or(Distance::Unreachable, Distance::Steps)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Steps(d) => write!(f, "{d}"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Collapses duplicate targets, keeping the position of their first occurrence.
pub(crate) fn distinct_targets(targets: &[Coord]) -> FxIndexSet<Coord> {
    targets.iter().copied().collect()
}

pub trait GridSolver {
    /// Computes the distance from `start` to each distinct target, in the order the targets were
    /// first supplied. `start` must be on the board and not a wall.
    fn distances(&self, board: &Board, start: Coord, targets: &[Coord]) -> Vec<(Coord, Distance)>;

    /// The reachable targets sorted by ascending distance. The sort is stable, so ties keep the
    /// supplied target order.
    fn sorted_reachable(
        &self,
        board: &Board,
        start: Coord,
        targets: &[Coord],
    ) -> Vec<(Coord, u32)> {
        sort_and_filter(self.distances(board, start, targets))
    }
}

/// Stable-sorts by distance with unreachable entries last, then drops the unreachable ones.
pub fn sort_and_filter(distances: Vec<(Coord, Distance)>) -> Vec<(Coord, u32)> {
    use itertools::Itertools;
    distances
        .into_iter()
        .sorted_by_key(|(_, d)| *d)
        .filter_map(|(c, d)| d.steps().map(|d| (c, d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_last() {
        assert!(Distance::Steps(u32::MAX) < Distance::Unreachable);
        assert!(Distance::Steps(0) < Distance::Steps(1));
    }

    #[test]
    fn sort_is_stable_and_filters() {
        let a = Coord::new(0, 2);
        let b = Coord::new(2, 0);
        let c = Coord::new(5, 5);
        let d = Coord::new(0, 0);
        let sorted = sort_and_filter(vec![
            (c, Distance::Unreachable),
            (a, Distance::Steps(2)),
            (b, Distance::Steps(2)),
            (d, Distance::Steps(0)),
        ]);
        assert_eq!(sorted, vec![(d, 0), (a, 2), (b, 2)]);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let a = Coord::new(1, 1);
        let b = Coord::new(0, 1);
        let distinct = distinct_targets(&[a, b, a, b, a]);
        assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec![a, b]);
    }
}
