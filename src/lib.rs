//! # ghost_distance
//!
//! Shortest-path distances from Pacman to every ghost on a rectangular board, using
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over the four
//! cardinal directions. Walls are the only obstacles. The search stops as soon as every ghost has
//! been found, and ghosts on a different
//! [connected component](https://en.wikipedia.org/wiki/Component_(graph_theory)) than Pacman are
//! filtered out beforehand so they cannot force a full flood.
pub mod board;
pub mod cell;
pub mod coord;
pub mod error;
pub mod load;
pub mod locate;
pub mod report;
pub mod solver;

pub use board::Board;
pub use cell::Cell;
pub use coord::Coord;
pub use error::BoardError;
pub use load::load_board;
pub use locate::find_coordinates;
pub use report::{find_pacman, ghost_distances, DistanceReport};
pub use solver::bfs::bfs_with_obstacles;
pub use solver::{Distance, GridSolver};
