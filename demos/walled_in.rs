use ghost_distance::{bfs_with_obstacles, find_coordinates, find_pacman, Board, Cell};

// Pacman is boxed in by walls, so the ghost is reported as unreachable
//  ___
// |P# |
// |## |
// |  G|
//  ___

fn main() {
    use Cell::*;
    let board = Board::from_rows(vec![
        vec![Pacman, Wall, Open],
        vec![Wall, Wall, Open],
        vec![Open, Open, Ghost],
    ])
    .unwrap();
    let pacman = find_pacman(&board).unwrap();
    let ghosts = find_coordinates(&board, Ghost);
    for (ghost, distance) in bfs_with_obstacles(&board, pacman, &ghosts) {
        println!("{}: {}", ghost, distance);
    }
}
