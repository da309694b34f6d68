use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a board file unusable.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board file {} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read board file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed .npy file")]
    Npy(#[from] ndarray_npy::ReadNpyError),
    #[error("unsupported .npy element type, expected an integer or float array")]
    UnsupportedDtype,
    #[error("malformed text board")]
    Csv(#[from] csv::Error),
    #[error("board must have exactly 2 dimensions, found {ndim}")]
    Dimensions { ndim: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("board has no cells")]
    Empty,
    #[error("cell ({row}, {col}) is {text:?}, which is not an integer")]
    Parse { row: usize, col: usize, text: String },
    #[error("cell ({row}, {col}) holds {value}, expected one of 0, 1, 2, 3")]
    InvalidCell { row: usize, col: usize, value: String },
    #[error("there must be exactly one Pacman on the board, found {found}")]
    PacmanCount { found: usize },
}
