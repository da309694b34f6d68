use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The meaning of a single board cell. The discriminants are the raw values stored in board
/// files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Open = 0,
    /// The only cell kind that blocks movement.
    Wall = 1,
    Ghost = 2,
    /// Exactly one per valid board.
    Pacman = 3,
}

impl Cell {
    pub fn blocks(self) -> bool {
        self == Cell::Wall
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
