use crate::board::Board;
use crate::cell::Cell;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::locate::find_coordinates;
use crate::solver::bfs::BfsSolver;
use crate::solver::{sort_and_filter, Distance, GridSolver};
use core::fmt;
use itertools::Itertools;
use log::{info, warn};

/// Reachable ghosts with their distance from Pacman, nearest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceReport {
    pub entries: Vec<(Coord, u32)>,
}

impl DistanceReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn nearest(&self) -> Option<(Coord, u32)> {
        self.entries.first().copied()
    }
}

/// Renders as a list of tuples, e.g. `[((0, 2), 2), ((2, 0), 2)]`.
impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.entries
                .iter()
                .format_with(", ", |(c, d), f| f(&format_args!("({c}, {d})")))
        )
    }
}

/// Locates the single Pacman on the board.
pub fn find_pacman(board: &Board) -> Result<Coord, BoardError> {
    match find_coordinates(board, Cell::Pacman).as_slice() {
        [pacman] => Ok(*pacman),
        others => Err(BoardError::PacmanCount {
            found: others.len(),
        }),
    }
}

/// Computes the distance from Pacman to every ghost, sorted ascending with unreachable ghosts
/// dropped. Ghosts outside Pacman's connected component never enter the search.
pub fn ghost_distances(board: &Board) -> Result<DistanceReport, BoardError> {
    ghost_distances_with(board, &BfsSolver)
}

pub fn ghost_distances_with<S: GridSolver>(
    board: &Board,
    solver: &S,
) -> Result<DistanceReport, BoardError> {
    let pacman = find_pacman(board)?;
    let ghosts = find_coordinates(board, Cell::Ghost);
    info!("Pacman at {}, {} ghost(s) on the board", pacman, ghosts.len());

    let (reachable, walled_off): (Vec<Coord>, Vec<Coord>) = ghosts
        .into_iter()
        .partition(|ghost| board.reachable(&pacman, ghost));
    if !walled_off.is_empty() {
        warn!(
            "{} ghost(s) cannot be reached from {}: {}",
            walled_off.len(),
            pacman,
            walled_off.iter().join(", ")
        );
    }

    let mut distances = if reachable.is_empty() {
        Vec::new()
    } else {
        solver.distances(board, pacman, &reachable)
    };
    distances.extend(walled_off.into_iter().map(|g| (g, Distance::Unreachable)));

    Ok(DistanceReport {
        entries: sort_and_filter(distances),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell::*;

    #[test]
    fn report_format() {
        let report = DistanceReport {
            entries: vec![(Coord::new(0, 2), 2), (Coord::new(2, 0), 2)],
        };
        assert_eq!(report.to_string(), "[((0, 2), 2), ((2, 0), 2)]");
        assert_eq!(DistanceReport::default().to_string(), "[]");
    }

    #[test]
    fn missing_pacman() {
        let board = Board::from_rows(vec![vec![Open, Ghost]]).unwrap();
        assert!(matches!(
            ghost_distances(&board).unwrap_err(),
            BoardError::PacmanCount { found: 0 }
        ));
    }

    #[test]
    fn two_pacmen() {
        let board = Board::from_rows(vec![vec![Pacman, Ghost, Pacman]]).unwrap();
        assert!(matches!(
            find_pacman(&board).unwrap_err(),
            BoardError::PacmanCount { found: 2 }
        ));
    }

    #[test]
    fn walled_off_ghost_is_dropped() {
        // |P . # G|
        // |G . # .|
        let board = Board::from_rows(vec![
            vec![Pacman, Open, Wall, Ghost],
            vec![Ghost, Open, Wall, Open],
        ])
        .unwrap();
        let report = ghost_distances(&board).unwrap();
        assert_eq!(report.entries, vec![(Coord::new(1, 0), 1)]);
        assert_eq!(report.nearest(), Some((Coord::new(1, 0), 1)));
    }

    #[test]
    fn no_ghosts_is_empty() {
        let board = Board::from_rows(vec![vec![Pacman, Open]]).unwrap();
        assert!(ghost_distances(&board).unwrap().is_empty());
    }
}
