//! Immutable square board value.
//!
//! Boards are never mutated after construction: move application in the
//! rules module copies the cell grid and returns a new `Board`. Equality and
//! hashing are structural so a board can key the transposition cache.

use crate::board::board_types::{Cell, Color, Move};
use crate::errors::BoardError;

pub const STANDARD_SIZE: usize = 8;
const MIN_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    // Row-major: index = row * size + column.
    cells: Box<[Cell]>,
}

impl Board {
    /// Standard opening position with the four centre disks.
    pub fn new_game(size: usize) -> Result<Self, BoardError> {
        validate_size(size)?;
        Ok(Self::opening_position(size))
    }

    #[inline]
    pub fn standard() -> Self {
        Self::opening_position(STANDARD_SIZE)
    }

    fn opening_position(size: usize) -> Self {
        let h = size / 2;
        let mut cells = vec![Cell::Empty; size * size];
        cells[(h - 1) * size + (h - 1)] = Cell::Second;
        cells[h * size + h] = Cell::Second;
        cells[(h - 1) * size + h] = Cell::First;
        cells[h * size + (h - 1)] = Cell::First;
        Self {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Build a board from rows of wire cell codes (0 empty, 1 first, 2 second).
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        validate_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                    expected: size,
                });
            }
            for &code in row {
                cells.push(Cell::from_code(code).ok_or(BoardError::InvalidCell(code))?);
            }
        }
        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, column: isize, row: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&column) && (0..n).contains(&row)
    }

    /// Cell at (column, row). Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[row * self.size + column]
    }

    pub fn count(&self, color: Color) -> u32 {
        let target = color.to_cell();
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Rows of wire codes, the layout the game manager sends.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Copy of this board with `mover`'s disk on `mv` and every listed cell
    /// turned to the mover's color.
    pub(crate) fn with_placement(&self, mover: Color, mv: Move, flips: &[Move]) -> Self {
        let mut cells = self.cells.clone();
        let disk = mover.to_cell();
        cells[mv.row * self.size + mv.column] = disk;
        for flip in flips {
            cells[flip.row * self.size + flip.column] = disk;
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_size(size: usize) -> Result<(), BoardError> {
    if size < MIN_SIZE || size % 2 != 0 {
        return Err(BoardError::InvalidSize(size));
    }
    Ok(())
}
