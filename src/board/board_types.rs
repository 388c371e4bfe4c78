//! Primitive value types shared by the board engine, search and protocol.

use std::fmt;

/// Player color. `First` (dark) always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    First,
    Second,
}

impl Color {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::First => 0,
            Color::Second => 1,
        }
    }

    /// Wire code used by the game manager: 1 for first, 2 for second.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Color::First => 1,
            Color::Second => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Color::First),
            2 => Some(Color::Second),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_cell(self) -> Cell {
        match self {
            Color::First => Cell::First,
            Color::Second => Cell::Second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    First,
    Second,
}

impl Cell {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::First => 1,
            Cell::Second => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::First),
            2 => Some(Cell::Second),
            _ => None,
        }
    }

    #[inline]
    pub fn owner(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(Color::First),
            Cell::Second => Some(Color::Second),
        }
    }
}

/// A disk placement. Only meaningful relative to a specific board and mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

impl Move {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Color, Move};

    #[test]
    fn color_codes_round_trip_and_reject_unknown() {
        assert_eq!(Color::from_code(1), Some(Color::First));
        assert_eq!(Color::from_code(2), Some(Color::Second));
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::First.opponent(), Color::Second);
        assert_eq!(Color::Second.to_cell().owner(), Some(Color::Second));
    }

    #[test]
    fn cell_codes_reject_out_of_range() {
        assert_eq!(Cell::from_code(0), Some(Cell::Empty));
        assert_eq!(Cell::from_code(3), None);
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn move_displays_as_protocol_pair() {
        assert_eq!(Move::new(3, 5).to_string(), "3 5");
    }
}
