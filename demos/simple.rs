use ghost_distance::{ghost_distances, Board, Cell};

// In this example the distances to two ghosts are computed on a 3x3 board with shape
//  ___
// |P G|
// | # |
// |G  |
//  ___
// where
// - # marks a wall
// - P marks Pacman
// - G marks a ghost
// Both ghosts are two steps away, so they are listed in board order.

fn main() {
    use Cell::*;
    let board = Board::from_rows(vec![
        vec![Pacman, Open, Ghost],
        vec![Open, Wall, Open],
        vec![Ghost, Open, Open],
    ])
    .unwrap();
    println!("{}", board);
    let report = ghost_distances(&board).unwrap();
    println!("Distances: {}", report);
    if let Some((ghost, distance)) = report.nearest() {
        println!("Nearest ghost: {} at {} steps", ghost, distance);
    }
}
