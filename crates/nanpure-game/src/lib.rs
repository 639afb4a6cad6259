//! Game-session engine for number-place puzzles.
//!
//! This crate orchestrates a single puzzle session on top of
//! [`nanpure_core`]'s rules and [`nanpure_solver`]'s reference solution:
//!
//! - [`Game`] owns the *given*, *current*, and *solved* grids, applies user
//!   edits, and classifies the board after every operation as a
//!   [`BoardState`];
//! - [`History`] records reversible [`Move`]s on two stacks for undo/redo;
//! - the check feature compares filled cells against the reference solution
//!   and locks them in on success, and the hint feature either reveals one
//!   correct cell or rolls mistaken moves back.
//!
//! Every operation is total: when a precondition is not met (editing a given
//! cell, editing a won board, undoing with an empty stack) the operation is
//! a documented no-op that returns the unchanged state.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, Grid, Position};
//! use nanpure_game::{BoardState, Game};
//!
//! let given: Grid = "\
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
//! let mut game = Game::new(given).expect("puzzle is solvable");
//! assert_eq!(game.state(), BoardState::Ok);
//!
//! // A duplicate in row 0 is flagged immediately.
//! game.place(Position::new(2, 0), Digit::D5);
//! assert_eq!(game.state(), BoardState::InvalidPlacement);
//!
//! let (state, _pos) = game.undo();
//! assert_eq!(state, BoardState::Ok);
//! # Ok::<(), nanpure_core::ParseGridError>(())
//! ```

mod board_state;
mod game;
mod history;

pub use self::{
    board_state::BoardState,
    game::{Game, NewGameError},
    history::{History, Move},
};
