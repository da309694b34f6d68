//! Reading boards from disk. `.npy` files are NumPy integer or float arrays; every other
//! extension is read as comma-separated text with one board row per line and `#` comment lines.
use crate::board::Board;
use crate::cell::Cell;
use crate::error::BoardError;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use ndarray::{Array2, ArrayD, Ix2};
use ndarray_npy::{ReadNpyError, ReadNpyExt, ReadableElement};
use num_traits::ToPrimitive;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Loads and validates a board. The Pacman count is not checked here.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BoardError::NotFound {
            path: path.to_owned(),
        },
        _ => BoardError::Io {
            path: path.to_owned(),
            source,
        },
    })?;
    let is_npy = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("npy"));
    let board = if is_npy {
        board_from_npy(&bytes)?
    } else {
        board_from_text(&bytes)?
    };
    info!(
        "Loaded {}x{} board from {}",
        board.rows(),
        board.cols(),
        path.display()
    );
    Ok(board)
}

/// Returns [None] if the file holds a different element type than `T`.
fn read_npy_as<T: ReadableElement>(bytes: &[u8]) -> Result<Option<ArrayD<T>>, BoardError> {
    match ArrayD::<T>::read_npy(bytes) {
        Ok(raw) => Ok(Some(raw)),
        Err(ReadNpyError::WrongDescriptor(descr)) => {
            debug!("Element type {descr:?} is not {}", std::any::type_name::<T>());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

macro_rules! try_npy_dtypes {
    ($bytes:expr, $($t:ty),+) => {
        $(
            if let Some(raw) = read_npy_as::<$t>($bytes)? {
                return board_from_raw(raw);
            }
        )+
    };
}

/// Parses the contents of a `.npy` file holding a 2-dimensional numeric array. Float cells must
/// hold whole numbers.
pub fn board_from_npy(bytes: &[u8]) -> Result<Board, BoardError> {
    try_npy_dtypes!(bytes, i64, i32, i16, i8, u8, u16, u32, u64, f64, f32);
    Err(BoardError::UnsupportedDtype)
}

fn board_from_raw<T: ToPrimitive + fmt::Display + Copy>(
    raw: ArrayD<T>,
) -> Result<Board, BoardError> {
    let ndim = raw.ndim();
    let raw = raw
        .into_dimensionality::<Ix2>()
        .map_err(|_| BoardError::Dimensions { ndim })?;
    let (rows, cols) = raw.dim();
    if rows == 0 || cols == 0 {
        return Err(BoardError::Empty);
    }
    let cells = raw
        .indexed_iter()
        .map(|((row, col), value)| cell_at(row, col, *value))
        .collect::<Result<Vec<Cell>, BoardError>>()?;
    Array2::from_shape_vec((rows, cols), cells)
        .map(Board::new)
        .map_err(|_| BoardError::Dimensions { ndim })
}

/// `to_u8` truncates floats, so fractional values are rejected before the conversion.
fn cell_at<T: ToPrimitive + fmt::Display>(
    row: usize,
    col: usize,
    value: T,
) -> Result<Cell, BoardError> {
    let integral = value.to_f64().is_some_and(|v| v.fract() == 0.0);
    integral
        .then(|| value.to_u8())
        .flatten()
        .and_then(|v| Cell::try_from(v).ok())
        .ok_or_else(|| BoardError::InvalidCell {
            row,
            col,
            value: value.to_string(),
        })
}

/// Parses a comma-separated text board.
pub fn board_from_text(bytes: &[u8]) -> Result<Board, BoardError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(bytes);
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    // i128 so that out-of-range integers surface as invalid cells rather than parse failures
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let value = text.parse::<i128>().map_err(|_| BoardError::Parse {
                    row,
                    col,
                    text: text.to_owned(),
                })?;
                cell_at(row, col, value)
            })
            .collect::<Result<Vec<Cell>, BoardError>>()?;
        if let Some(first) = rows.first() {
            if first.len() != cells.len() {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: first.len(),
                    found: cells.len(),
                });
            }
        }
        rows.push(cells);
    }
    let n_cols = rows.first().map_or(0, Vec::len);
    if n_cols == 0 {
        return Err(BoardError::Empty);
    }
    Array2::from_shape_vec((rows.len(), n_cols), rows.concat())
        .map(Board::new)
        .map_err(|_| BoardError::Dimensions { ndim: 2 })
}
