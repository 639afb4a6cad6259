//! Placement, house, and whole-board validity.
//!
//! These predicates are pure functions over a [`Grid`] snapshot, decoupled
//! from the mutation paths in the game layer so they can be tested (and
//! reasoned about) in isolation.
//!
//! Two notions of validity coexist:
//!
//! - [`Grid::placement_is_valid`] is local: it asks whether one cell's digit
//!   clashes with its row, column, or box. It is the right question to ask
//!   about the cell the user just edited.
//! - [`Grid::is_consistent`] is global: it asks whether any of the 27 houses
//!   contains a duplicate anywhere. After an edit the game layer asks both,
//!   because a board can be globally broken in a place the local check does
//!   not see.

use crate::{Grid, House, Position};

impl Grid {
    /// Returns whether the digit at `pos` appears in no other cell of its
    /// row, column, or 3×3 box.
    ///
    /// The box is scanned as the complete 3×3 block containing `pos`. An
    /// empty cell is vacuously valid: with no digit placed there is nothing
    /// to clash (the redo path relies on this when it re-applies a
    /// deletion).
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(4, 4), Some(Digit::D5));
    /// grid.set(Position::new(5, 5), Some(Digit::D5));
    ///
    /// // Same box, different row and column.
    /// assert!(!grid.placement_is_valid(Position::new(5, 5)));
    /// ```
    #[must_use]
    pub fn placement_is_valid(&self, pos: Position) -> bool {
        let Some(digit) = self.get(pos) else {
            return true;
        };

        for i in 0..9 {
            let row_peer = Position::new(i, pos.y());
            if row_peer != pos && self.get(row_peer) == Some(digit) {
                return false;
            }
            let column_peer = Position::new(pos.x(), i);
            if column_peer != pos && self.get(column_peer) == Some(digit) {
                return false;
            }
            let box_peer = Position::from_box(pos.box_index(), i);
            if box_peer != pos && self.get(box_peer) == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns whether each digit appears at most once in `house`.
    #[must_use]
    pub fn house_is_valid(&self, house: House) -> bool {
        let mut counts = [0u8; 9];
        for pos in house.positions() {
            if let Some(digit) = self.get(pos) {
                let count = &mut counts[usize::from(digit.value() - 1)];
                *count += 1;
                if *count > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Returns whether row `y` contains no duplicate digit.
    #[must_use]
    pub fn row_is_valid(&self, y: u8) -> bool {
        self.house_is_valid(House::Row { y })
    }

    /// Returns whether column `x` contains no duplicate digit.
    #[must_use]
    pub fn column_is_valid(&self, x: u8) -> bool {
        self.house_is_valid(House::Column { x })
    }

    /// Returns whether box `index` contains no duplicate digit.
    #[must_use]
    pub fn box_is_valid(&self, index: u8) -> bool {
        self.house_is_valid(House::Box { index })
    }

    /// Returns whether all 27 houses are individually valid.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.into_iter().all(|house| self.house_is_valid(house))
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL.into_iter().all(|pos| self.get(pos).is_some())
    }

    /// Returns whether the grid is a complete, valid solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}
