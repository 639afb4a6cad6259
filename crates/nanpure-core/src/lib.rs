//! Core data model and rules for number-place (Sudoku) puzzles.
//!
//! This crate provides the grid representation shared by every layer of the
//! engine — the given puzzle, the live board, and the reference solution all
//! use the same [`Grid`] — together with the pure validity predicates that
//! decide whether a placement, a house, or the whole board obeys the rules.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9; empty cells are `Option<Digit>`
//! - [`position`]: board coordinates with a fixed row-major ordering
//! - [`house`]: the 27 constraint groups (rows, columns, 3×3 boxes)
//! - [`grid`]: the 9×9 cell grid and its 81-character text format
//! - [`validate`]: placement, house, and whole-board validity on [`Grid`]
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, Grid, Position};
//!
//! let mut grid: Grid = "\
//! 53..7....\
//! 6..195...\
//! .98....6.\
//! 8...6...3\
//! 4..8.3..1\
//! 7...2...6\
//! .6....28.\
//! ...419..5\
//! ....8..79\
//! "
//! .parse()?;
//!
//! assert!(grid.is_consistent());
//! assert!(!grid.is_complete());
//!
//! // Placing a duplicate into row 0 makes that placement invalid.
//! let pos = Position::new(2, 0);
//! grid.set(pos, Some(Digit::D5));
//! assert!(!grid.placement_is_valid(pos));
//! # Ok::<(), nanpure_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod grid;
pub mod house;
pub mod position;
pub mod validate;

pub use self::{
    digit::Digit,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
};
