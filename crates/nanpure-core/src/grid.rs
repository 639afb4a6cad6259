//! The 9×9 cell grid and its text format.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of optionally filled cells.
///
/// This is the shared representation for the *given* puzzle, the live
/// *current* board, and the precomputed *solution*: the three differ only in
/// how the game layer treats them, not in shape.
///
/// # Text format
///
/// [`FromStr`] and [`Display`] use an 81-character row-major encoding:
/// `'1'`-`'9'` for digits and `'.'` or `'0'` for empty cells. ASCII
/// whitespace is ignored on parse so fixtures can be laid out one row per
/// line in source.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert!(grid.get(Position::new(0, 0)).is_none());
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
///
/// let text = grid.to_string();
/// assert_eq!(text.len(), 81);
/// assert_eq!(text.parse::<Grid>()?, grid);
/// # Ok::<(), nanpure_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an entirely empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell value at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos` to `value` (`None` empties the cell).
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns an iterator over the empty positions in row-major order.
    ///
    /// The order is fixed so that callers indexing into the enumeration
    /// (the hint feature's uniform draw) behave reproducibly.
    #[must_use]
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(|pos| self.get(*pos).is_none())
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Errors from parsing a [`Grid`] out of its text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character was neither a digit, an empty-cell marker, nor whitespace.
    #[display("invalid cell character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let value = match ch {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let byte = ch as u8;
                    Digit::try_from_value(byte - b'0')
                }
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            if count < 81 {
                grid.cells[count] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
